use std::{cell::RefCell, rc::Rc};

use futures::{
    channel::oneshot,
    executor::{LocalPool, LocalSpawner},
    future::LocalBoxFuture,
    task::LocalSpawnExt,
};

use super::transport::*;
use crate::{
    config::frontend_config,
    errors::{Error, ErrorKind, Result},
};

type Reply = oneshot::Sender<Result<RawResponse>>;

/// Requests wait until the test answers them, completions run on a
/// local pool the test drives.
pub struct FakeTransport {
    spawner: LocalSpawner,
    pending: RefCell<Vec<(ApiRequest, Reply)>>,
}

impl FakeTransport {
    pub fn new(pool: &LocalPool) -> Rc<Self> {
        Rc::new(Self {
            spawner: pool.spawner(),
            pending: RefCell::new(Vec::new()),
        })
    }

    /// Requests still waiting for an answer, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.pending
            .borrow()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub fn reply(&self, url: &str, response: Result<RawResponse>) {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .position(|(request, _)| request.url == url)
            .unwrap_or_else(|| panic!("no pending request for {url}"));
        let (_, reply) = pending.remove(index);
        reply.send(response).unwrap();
    }

    pub fn ok(&self, url: &str, body: &str) {
        self.reply(
            url,
            Ok(RawResponse {
                status: 200,
                body: body.to_owned(),
            }),
        );
    }
}

impl Transport for FakeTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> LocalBoxFuture<'static, Result<RawResponse>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((request, tx));
        Box::pin(async move {
            rx.await.unwrap_or_else(|_| {
                Err(Error::new(ErrorKind::Network, "request dropped"))
            })
        })
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner.spawn_local(task).unwrap();
    }
}

/// Full URL of `path` on the configured backend.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", frontend_config().api_server)
}
