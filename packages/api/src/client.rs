//! The typed client every view talks to.

use serde_json::Value;

use crate::collection::Collection;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AboutContent, ContactForm, Credentials, LoginResponse, Record, RecordDraft,
    MISSING_TOKEN_MESSAGE,
};
use crate::payload::{normalize_detail, normalize_list};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// `POST` endpoint for the contact form.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// `POST` endpoint for admin login.
pub const LOGIN_ENDPOINT: &str = "/api/admin/login";

/// `GET` endpoint for the "Our Story" content.
pub const ABOUT_ENDPOINT: &str = "/api/about";

/// Content API client over a [`Transport`].
#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// HTTP client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env(), HttpTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(&request.path);
        tracing::debug!("{:?} {}", request.method, url);
        let response = self.transport.send(&url, &request).await?;
        response.error_for_status()
    }

    /// Every record in a collection.
    pub async fn list(&self, collection: Collection) -> Result<Vec<Record>, ApiError> {
        let response = self.send(ApiRequest::get(collection.endpoint())).await?;
        Ok(normalize_list(&response.json()))
    }

    /// One record by id. A 404 or an empty payload is `Ok(None)`.
    pub async fn detail(&self, collection: Collection, id: &str) -> Result<Option<Record>, ApiError> {
        match self.send(ApiRequest::get(collection.record_endpoint(id))).await {
            Ok(response) => Ok(normalize_detail(&response.json())),
            Err(ApiError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn about(&self) -> Result<AboutContent, ApiError> {
        let response = self.send(ApiRequest::get(ABOUT_ENDPOINT)).await?;
        Ok(AboutContent::from_value(&response.json(), &self.config))
    }

    /// POST the contact form exactly as entered.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<(), ApiError> {
        let body = to_body(form)?;
        self.send(ApiRequest::post(CONTACT_ENDPOINT, body)).await?;
        Ok(())
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        credentials.validate()?;
        let response = self
            .send(ApiRequest::post(LOGIN_ENDPOINT, to_body(credentials)?))
            .await?;
        let parsed: LoginResponse = serde_json::from_value(response.json()).unwrap_or_default();
        parsed
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ApiError::Malformed(MISSING_TOKEN_MESSAGE.to_string()))
    }

    /// Create a record in a collection (admin).
    pub async fn create_record(
        &self,
        collection: Collection,
        draft: &RecordDraft,
        token: &str,
    ) -> Result<(), ApiError> {
        draft.validate()?;
        let request = ApiRequest::post(collection.endpoint(), to_body(draft)?).with_bearer(token);
        self.send(request).await?;
        Ok(())
    }

    /// Delete a record from a collection (admin).
    pub async fn delete_record(
        &self,
        collection: Collection,
        id: &str,
        token: &str,
    ) -> Result<(), ApiError> {
        let request = ApiRequest::delete(collection.record_endpoint(id)).with_bearer(token);
        self.send(request).await?;
        Ok(())
    }
}

fn to_body<S: serde::Serialize>(value: &S) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{send_contact, SubmitStatus};
    use crate::stub::StubTransport;
    use crate::transport::Method;
    use serde_json::json;

    fn client() -> ApiClient<StubTransport> {
        ApiClient::new(
            ApiConfig::default().with_base_url("https://api.test"),
            StubTransport::new(),
        )
    }

    fn contact() -> ContactForm {
        ContactForm {
            name: "A".into(),
            email: "a@b.com".into(),
            subject: "S".into(),
            message: "M".into(),
        }
    }

    #[tokio::test]
    async fn test_list_unwraps_data() {
        let client = client();
        client.transport().respond_json(
            Method::Get,
            "/api/authors",
            200,
            json!({"data": [{"id": 1, "name": "Ada"}, "Grace"]}),
        );

        let authors = client.list(Collection::Authors).await.unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[1].name, "Grace");
    }

    #[tokio::test]
    async fn test_list_errors_are_distinct() {
        let client = client();
        client.transport().respond(Method::Get, "/api/partners", 404, "");
        client.transport().respond(Method::Get, "/api/advisors", 503, "");

        assert_eq!(client.list(Collection::Partners).await, Err(ApiError::NotFound));
        assert_eq!(
            client.list(Collection::Advisors).await,
            Err(ApiError::Http {
                status: 503,
                message: None
            })
        );
        // No stub registered: behaves like an unreachable server.
        assert!(client.list(Collection::Events).await.unwrap_err().is_network());
    }

    #[tokio::test]
    async fn test_detail_not_found_vs_error() {
        let client = client();
        client.transport().respond(Method::Get, "/api/partners/1", 200, "");
        client.transport().respond(Method::Get, "/api/partners/2", 200, "null");
        client.transport().respond(Method::Get, "/api/partners/3", 500, "");
        client.transport().respond(Method::Get, "/api/partners/4", 404, "");
        client.transport().respond_json(
            Method::Get,
            "/api/partners/5",
            200,
            json!({"data": {"id": 5, "name": "Globex"}}),
        );

        assert_eq!(client.detail(Collection::Partners, "1").await, Ok(None));
        assert_eq!(client.detail(Collection::Partners, "2").await, Ok(None));
        assert!(client.detail(Collection::Partners, "3").await.is_err());
        assert_eq!(client.detail(Collection::Partners, "4").await, Ok(None));
        let found = client.detail(Collection::Partners, "5").await.unwrap().unwrap();
        assert_eq!(found.name, "Globex");
    }

    #[tokio::test]
    async fn test_contact_success_clears_form() {
        let client = client();
        client.transport().respond(Method::Post, CONTACT_ENDPOINT, 200, "{}");

        let mut form = contact();
        let status = send_contact(&client, &form).await;
        form.apply_outcome(&status);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body,
            Some(json!({"name": "A", "email": "a@b.com", "subject": "S", "message": "M"}))
        );
        assert_eq!(status, SubmitStatus::Sent);
        assert!(status.message().unwrap().contains("success"));
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_contact_network_failure_keeps_fields() {
        let client = client();
        client.transport().fail(
            Method::Post,
            CONTACT_ENDPOINT,
            ApiError::Network("connection refused".into()),
        );

        let mut form = contact();
        let status = send_contact(&client, &form).await;
        form.apply_outcome(&status);

        assert!(status.is_error());
        assert!(status.message().unwrap().contains("failed"));
        assert_eq!(form, contact());
    }

    #[tokio::test]
    async fn test_contact_validation_sends_nothing() {
        let client = client();
        let mut form = contact();
        form.email = "nope".into();

        let status = send_contact(&client, &form).await;
        assert!(matches!(status, SubmitStatus::Invalid(_)));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_login() {
        let client = client();
        let credentials = Credentials {
            username: "admin".into(),
            password: "pw".into(),
        };

        client
            .transport()
            .respond_json(Method::Post, LOGIN_ENDPOINT, 200, json!({"token": "abc"}));
        assert_eq!(client.login(&credentials).await, Ok("abc".to_string()));

        client.transport().respond_json(
            Method::Post,
            LOGIN_ENDPOINT,
            401,
            json!({"error": "bad credentials"}),
        );
        let err = client.login(&credentials).await.unwrap_err();
        assert_eq!(err.user_message(), "bad credentials");

        client
            .transport()
            .respond_json(Method::Post, LOGIN_ENDPOINT, 200, json!({}));
        assert!(matches!(client.login(&credentials).await, Err(ApiError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_admin_requests_carry_bearer() {
        let client = client();
        client.transport().respond(Method::Post, "/api/events", 201, "{}");
        client.transport().respond(Method::Delete, "/api/events/9", 204, "");

        let draft = RecordDraft {
            name: "Open Day".into(),
            ..RecordDraft::default()
        };
        client.create_record(Collection::Events, &draft, "tok").await.unwrap();
        client.delete_record(Collection::Events, "9", "tok").await.unwrap();

        let requests = client.transport().requests();
        assert!(requests.iter().all(|r| r.bearer.as_deref() == Some("tok")));
        assert!(client
            .create_record(Collection::Events, &RecordDraft::default(), "tok")
            .await
            .is_err());
    }
}
