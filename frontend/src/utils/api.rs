//! Fetch JSON from the judge API into reactive state.
//!
//! [`use_api`] turns a (possibly reactive) API path such as `/jobs/42` into
//! an [`ApiResource`]. The resource re-fetches whenever the path changes and
//! keeps `data`, `error` and `is_loading` in signals.
//!
//! Responses may complete out of order. Every request takes a ticket from
//! the resource's [`RequestTracker`] when it is issued, and a completion
//! only writes state if its ticket is still the latest one, so the last
//! issued request always wins.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use futures::future::LocalBoxFuture;
use leptos::*;
use serde::de::DeserializeOwned;

use super::transport::*;
use crate::{
    config::frontend_config,
    errors::{Context, Error, ErrorKind, Result},
    models::ErrorResponse,
};

/// `origin + path`, recomputed when `path` changes.
pub fn join_origin(
    origin: impl Into<String>,
    path: impl Into<MaybeSignal<String>>,
) -> Signal<String> {
    let origin = origin.into();
    let path = path.into();
    Signal::derive(move || path.with(|path| format!("{origin}{path}")))
}

/// Full URL of an API path on the configured backend.
pub fn api_url(path: impl Into<MaybeSignal<String>>) -> Signal<String> {
    join_origin(frontend_config().api_server.clone(), path)
}

/// Hands out increasing tickets, the latest one is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    pub fn issue(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[derive(Clone)]
pub struct UseApiOptions {
    method: Method,
    body: Option<MaybeSignal<serde_json::Value>>,
    headers: Vec<(String, String)>,
    immediate: bool,
    refetch: bool,
}

impl Default for UseApiOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            body: None,
            headers: Vec::new(),
            immediate: true,
            refetch: true,
        }
    }
}

impl UseApiOptions {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// JSON body, a reactive body is re-sent when it changes
    pub fn body(mut self, body: impl Into<MaybeSignal<serde_json::Value>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Fetch on creation, default `true`
    pub fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    /// Fetch again when the path or body changes, default `true`
    pub fn refetch(mut self, refetch: bool) -> Self {
        self.refetch = refetch;
        self
    }
}

/// State of one API fetch, owned by the view that created it.
pub struct ApiResource<T: 'static> {
    pub data: Signal<Option<T>>,
    pub error: Signal<Option<Error>>,
    pub is_loading: Signal<bool>,
    /// HTTP status of the response currently shown
    pub status: Signal<Option<u16>>,
    pub url: Signal<String>,
    fetcher: StoredValue<Fetcher<T>>,
}

impl<T: 'static> Clone for ApiResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ApiResource<T> {}

impl<T: DeserializeOwned + 'static> ApiResource<T> {
    /// Fetch again without a change of path.
    pub fn execute(&self) {
        self.fetcher.with_value(Fetcher::execute);
    }
}

struct Fetcher<T: 'static> {
    url: Signal<String>,
    method: Method,
    headers: Vec<(String, String)>,
    body: Option<MaybeSignal<serde_json::Value>>,
    tracker: Rc<RequestTracker>,
    transport: Rc<dyn Transport>,
    /// URL the current `data` was fetched from
    data_url: Rc<RefCell<Option<String>>>,
    data: RwSignal<Option<T>>,
    error: RwSignal<Option<Error>>,
    is_loading: RwSignal<bool>,
    status: RwSignal<Option<u16>>,
}

impl<T: DeserializeOwned + 'static> Fetcher<T> {
    fn request(&self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            url: self.url.get_untracked(),
            headers: self.headers.clone(),
            body: self
                .body
                .as_ref()
                .map(|body| body.with_untracked(|body| body.to_string())),
        }
    }

    fn execute(&self) {
        let task = self.start();
        self.transport.spawn(task);
    }

    /// Issue the request now, the returned task applies its result.
    fn start(&self) -> LocalBoxFuture<'static, ()> {
        let ticket = self.tracker.issue();
        let request = self.request();
        tracing::debug!(ticket, url = %request.url, method = ?request.method, "request issued");
        self.is_loading.set(true);

        let url = request.url.clone();
        let response = self.transport.send(request);
        let tracker = self.tracker.clone();
        let data_url = self.data_url.clone();
        let (data, error, is_loading, status) =
            (self.data, self.error, self.is_loading, self.status);

        Box::pin(async move {
            let response = response.await;
            if !tracker.is_current(ticket) {
                tracing::debug!(ticket, "discarding stale response");
                return;
            }
            let code = response.as_ref().ok().map(|raw| raw.status);
            let decoded = response.and_then(decode::<T>);

            _ = status.try_set(code);
            match decoded {
                Ok(value) => {
                    *data_url.borrow_mut() = Some(url);
                    _ = data.try_set(Some(value));
                    _ = error.try_set(None);
                }
                Err(err) => {
                    tracing::warn!(ticket, %err, "fetch failed");
                    // a dropped connection while refreshing keeps what is shown
                    let keep = err.kind == ErrorKind::Network
                        && data_url.borrow().as_deref() == Some(url.as_str());
                    if !keep {
                        *data_url.borrow_mut() = None;
                        _ = data.try_set(None);
                    }
                    _ = error.try_set(Some(err));
                }
            }
            _ = is_loading.try_set(false);
        })
    }
}

fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<T> {
    if !raw.is_success() {
        return Err(status_error(&raw));
    }
    // empty bodies read as `null`, for `()` and `Option<_>` payloads
    let body = match raw.body.trim() {
        "" => "null",
        body => body,
    };
    serde_json::from_str::<T>(body).context(format!("HTTP {}", raw.status))
}

fn status_error(raw: &RawResponse) -> Error {
    let fallback = ErrorKind::from_status(raw.status);
    match serde_json::from_str::<ErrorResponse>(&raw.body) {
        Ok(envelope) => Error::new(
            ErrorKind::from_reason(&envelope.reason).unwrap_or(fallback),
            envelope.message,
        ),
        Err(_) => Error::new(fallback, format!("HTTP {}", raw.status)),
    }
}

#[derive(Clone)]
struct ApiTransport(Rc<dyn Transport>);

/// Make [`use_api`] below this owner send through `transport`.
pub fn provide_transport(transport: Rc<dyn Transport>) {
    provide_context(ApiTransport(transport));
}

/// Fetch `path` from the judge API, with the provided transport or the
/// browser's `fetch`.
pub fn use_api<T>(
    path: impl Into<MaybeSignal<String>>,
    options: UseApiOptions,
) -> ApiResource<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let transport = use_context::<ApiTransport>()
        .map(|ApiTransport(transport)| transport)
        .unwrap_or_else(|| Rc::new(GlooTransport));
    use_api_with_transport(path, options, transport)
}

pub fn use_api_with_transport<T>(
    path: impl Into<MaybeSignal<String>>,
    options: UseApiOptions,
    transport: Rc<dyn Transport>,
) -> ApiResource<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let UseApiOptions {
        method,
        body,
        headers,
        immediate,
        refetch,
    } = options;
    let url = api_url(path);
    let data = create_rw_signal(None);
    let error = create_rw_signal(None);
    let is_loading = create_rw_signal(false);
    let status = create_rw_signal(None);

    let watched_body = body.clone();
    let fetcher = store_value(Fetcher {
        url,
        method,
        headers,
        body,
        tracker: Rc::new(RequestTracker::default()),
        transport,
        data_url: Rc::new(RefCell::new(None)),
        data,
        error,
        is_loading,
        status,
    });

    create_render_effect(move |prev: Option<()>| {
        if refetch {
            url.with(|_| ());
            if let Some(body) = &watched_body {
                body.with(|_| ());
            }
        }
        let first_run = prev.is_none();
        if (first_run && immediate) || (!first_run && refetch) {
            fetcher.with_value(Fetcher::execute);
        }
    });

    ApiResource {
        data: data.into(),
        error: error.into(),
        is_loading: is_loading.into(),
        status: status.into(),
        url,
        fetcher,
    }
}
