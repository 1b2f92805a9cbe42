//! Test doubles shared by the module tests.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiClient, HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use crate::config::ApiConfig;
use crate::session::{MemoryStorage, Session};

struct Route {
    method: Method,
    path: String,
    status: u16,
    body: String,
}

/// Answers by (method, path) and records every request. Unrouted requests
/// fail at the transport level, like an unreachable server.
#[derive(Clone, Default)]
pub struct StubTransport {
    routes: Rc<RefCell<Vec<Route>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for `method` on `path` (query string ignored).
    /// A later route for the same key replaces the earlier one.
    pub fn route(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.set_route(method, path, status, body);
        self
    }

    pub fn set_route(&self, method: Method, path: &str, status: u16, body: &str) {
        let mut routes = self.routes.borrow_mut();
        routes.retain(|r| !(r.method == method && r.path == path));
        routes.push(Route {
            method,
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && path_of(&r.url).ends_with(path))
            .count()
    }
}

fn path_of(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

#[async_trait(?Send)]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        let path = path_of(&request.url);
        let routes = self.routes.borrow();
        routes
            .iter()
            .find(|r| r.method == request.method && path.ends_with(&r.path))
            .map(|r| HttpResponse {
                status: r.status,
                body: r.body.clone(),
            })
            .ok_or_else(|| TransportError::new("Failed to fetch"))
    }
}

/// Client over the stub with a fresh in-memory session
pub fn client_with(transport: StubTransport) -> (ApiClient<StubTransport, MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let client = ApiClient::new(transport, Session::new(storage.clone()), ApiConfig::default());
    (client, storage)
}
