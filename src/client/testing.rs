//! Scripted transport for unit tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

use super::{ApiClient, ClientError, HttpRequest, HttpResponse, Method, Transport};

pub(crate) const TEST_BASE: &str = "http://clinic.test/api";

#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    routes: Rc<RefCell<Vec<(Method, String, HttpResponse)>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
    on_send: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` (query string ignored) with a canned response
    pub(crate) fn respond(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.routes.borrow_mut().push((
            method,
            path.to_string(),
            HttpResponse {
                status,
                body: body.to_string(),
            },
        ));
        self
    }

    /// Run `hook` while a request is in flight, before its response is returned
    pub(crate) fn on_send(&self, hook: impl Fn() + 'static) -> &Self {
        *self.on_send.borrow_mut() = Some(Box::new(hook));
        self
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn client(&self) -> ApiClient<FakeTransport> {
        ApiClient::new(self.clone(), TEST_BASE)
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.sent.borrow_mut().push(request.clone());
        if let Some(hook) = self.on_send.borrow().as_ref() {
            hook();
        }

        let path = request
            .url
            .strip_prefix(TEST_BASE)
            .unwrap_or(&request.url)
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string();

        self.routes
            .borrow()
            .iter()
            .find(|(method, route, _)| *method == request.method && *route == path)
            .map(|(_, _, response)| response.clone())
            .ok_or_else(|| ClientError::Network(format!("no route for {} {}", request.method, path)))
    }
}
