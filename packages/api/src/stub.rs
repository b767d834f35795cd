use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

type Route = (Method, String);

/// In-memory Transport with canned responses, for tests and offline previews.
///
/// Requests with no registered response fail with [`ApiError::Network`], the
/// same way an unreachable server does.
#[derive(Clone, Debug, Default)]
pub struct StubTransport {
    responses: Arc<Mutex<HashMap<Route, Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with a raw status and body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Ok(ApiResponse::new(status, body)));
        self
    }

    /// Answer `method path` with a JSON body.
    pub fn respond_json(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.respond(method, path, status, &body.to_string())
    }

    /// Fail `method path` before any response is produced.
    pub fn fail(&self, method: Method, path: &str, error: ApiError) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Err(error));
        self
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&(request.method, request.path.clone()))
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Network(format!("no route to {url}"))))
    }
}
