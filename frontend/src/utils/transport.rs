use futures::future::LocalBoxFuture;
use gloo::net::http::Request;

use crate::errors::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON text
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests and runs their completion.
///
/// Only transport failures are errors here, any HTTP status is a
/// [`RawResponse`].
pub trait Transport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<RawResponse>>;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::spawn_local(task);
    }
}

/// `fetch` of the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<RawResponse>> {
        Box::pin(async move {
            let url = request.url.as_str();
            let mut builder = match request.method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
                Method::Put => Request::put(url),
                Method::Delete => Request::delete(url),
            };
            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }
            let prepared = match request.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body),
                None => builder.build(),
            }
            .context(url)?;

            let response = prepared.send().await.context(url)?;
            let status = response.status();
            let body = response.text().await.context(url)?;
            Ok(RawResponse { status, body })
        })
    }
}
