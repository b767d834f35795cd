//! # Transport seam: how a request reaches the backend
//!
//! [`ApiClient`](crate::ApiClient) builds an [`ApiRequest`] and hands it to a
//! [`Transport`] together with the absolute URL. Two implementations exist:
//!
//! | Type | Used by |
//! |------|---------|
//! | [`HttpTransport`] | the running site; `reqwest` over the browser `fetch` API on WASM, hyper on native |
//! | [`StubTransport`](crate::StubTransport) | tests; canned responses keyed by method and path |
//!
//! A transport only reports *network-level* failure as an error. HTTP status
//! handling lives in [`ApiResponse::error_for_status`] so every transport gets
//! the same 404 / non-2xx classification.

use serde_json::Value;

use crate::error::ApiError;

/// HTTP verbs the front-end uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Base-relative path, e.g. `/api/partners/4`.
    pub path: String,
    /// JSON body for POST requests.
    pub body: Option<Value>,
    /// Session token sent as `Authorization: Bearer ...`.
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            bearer: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            bearer: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
            bearer: None,
        }
    }

    /// Builder method to attach a bearer token.
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }
}

/// Raw status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON. An empty or unparseable body reads as `null`.
    pub fn json(&self) -> Value {
        if self.body.trim().is_empty() {
            return Value::Null;
        }
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    /// The `error` or `message` string the server put in a JSON body, if any.
    pub fn server_message(&self) -> Option<String> {
        let value = self.json();
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Map non-2xx statuses onto [`ApiError`].
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        match self.status {
            _ if self.is_success() => Ok(self),
            404 => Err(ApiError::NotFound),
            status => Err(ApiError::Http {
                status,
                message: self.server_message(),
            }),
        }
    }
}

/// Async trait for sending a request to an absolute URL.
pub trait Transport {
    fn send(
        &self,
        url: &str,
        request: &ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, ApiError>>;
}

/// `reqwest`-backed transport used by the site.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ApiResponse::new(200, "[]").error_for_status().is_ok());
        assert!(ApiResponse::new(204, "").error_for_status().is_ok());
        assert_eq!(
            ApiResponse::new(404, "").error_for_status(),
            Err(ApiError::NotFound)
        );
        assert_eq!(
            ApiResponse::new(500, "oops").error_for_status(),
            Err(ApiError::Http {
                status: 500,
                message: None
            })
        );
    }

    #[test]
    fn test_server_message_extracted() {
        let response = ApiResponse::new(401, r#"{"error":"bad credentials"}"#);
        assert_eq!(response.server_message().as_deref(), Some("bad credentials"));

        let response = ApiResponse::new(422, r#"{"message":"name is required"}"#);
        assert_eq!(response.server_message().as_deref(), Some("name is required"));

        assert_eq!(ApiResponse::new(500, "<html>").server_message(), None);
    }

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(ApiResponse::new(200, "").json(), Value::Null);
        assert_eq!(ApiResponse::new(200, "  \n").json(), Value::Null);
        assert_eq!(ApiResponse::new(200, "null").json(), Value::Null);
    }
}
