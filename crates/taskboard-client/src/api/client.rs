//! API Client
//!
//! Composes headers, sends the request and maps the HTTP status onto
//! `ApiError`. Every failure is logged before it is returned.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::transport::{HttpRequest, HttpTransport, Method};
use super::{AuthApi, TasksApi, UsersApi};
use crate::config::ApiConfig;
use crate::session::{Session, SessionStorage};

const SERVER_ERROR_DETAIL: &str = "Server error occurred";
const INVALID_INPUT: &str = "Invalid input data";

/// Per-call options; headers here override the defaults
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn method(method: Method) -> Self {
        Self {
            method: Some(method),
            ..Default::default()
        }
    }

    pub fn json<B: Serialize>(method: Method, body: &B) -> ApiResult<Self> {
        Ok(Self {
            method: Some(method),
            body: Some(serde_json::to_string(body)?),
            ..Default::default()
        })
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    session: Session<S>,
    config: ApiConfig,
}

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    pub fn new(transport: T, session: Session<S>, config: ApiConfig) -> Self {
        Self {
            transport,
            session,
            config,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn auth(&self) -> AuthApi<'_, T, S> {
        AuthApi::new(self)
    }

    pub fn tasks(&self) -> TasksApi<'_, T, S> {
        TasksApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_, T, S> {
        UsersApi::new(self)
    }

    /// Send a request to `path` (relative to the base URL) and return the
    /// parsed JSON body unmodified on success.
    pub async fn call(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        let result = self.execute(path, options).await;
        if let Err(err) = &result {
            log::error!("API Error: {}", err);
        }
        result
    }

    /// `call` followed by decoding `data.<field>` (or `data` itself when `field` is None)
    pub async fn call_data<D: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        field: Option<&str>,
    ) -> ApiResult<D> {
        let body = self.call(path, options).await?;
        let result = decode_data(&body, field);
        if let Err(err) = &result {
            log::error!("API Error: {}", err);
        }
        result
    }

    async fn execute(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        let token = self.session.get_token();

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            set_header(&mut headers, name, value);
        }
        if let Some(token) = &token {
            set_header(&mut headers, "Authorization".to_string(), format!("Bearer {}", token));
        }

        let request = HttpRequest {
            method: options.method.unwrap_or(Method::Get),
            url: self.config.url(path),
            headers,
            body: options.body,
        };
        log::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        let data = parse_body(&response.body);

        if !response.is_success() {
            return Err(self.status_error(response.status, &data, token.is_some()));
        }
        Ok(data)
    }

    /// Fixed status → error table. Only 401 looks at whether the outgoing
    /// request carried a token.
    fn status_error(&self, status: u16, data: &Value, had_token: bool) -> ApiError {
        match status {
            401 if had_token => {
                self.session.logout();
                ApiError::AuthExpired
            }
            401 => ApiError::InvalidCredentials,
            422 => ApiError::Validation(validation_detail(data).unwrap_or_else(|| INVALID_INPUT.to_string())),
            404 => ApiError::NotFound,
            500 => ApiError::Server,
            _ => ApiError::Http {
                status,
                message: string_detail(data).unwrap_or_else(|| format!("Error: {}", status)),
            },
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(&name)) {
        Some(existing) => existing.1 = value,
        None => headers.push((name, value)),
    }
}

/// JSON body, or `{"detail": "Server error occurred"}` when it is not JSON
fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| json!({ "detail": SERVER_ERROR_DETAIL }))
}

fn string_detail(data: &Value) -> Option<String> {
    match data.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => Some(detail.clone()),
        _ => None,
    }
}

/// String detail verbatim, or the `msg` fields of a validation error list
fn validation_detail(data: &Value) -> Option<String> {
    if let Some(detail) = string_detail(data) {
        return Some(detail);
    }
    let messages: Vec<&str> = data
        .get("detail")?
        .as_array()?
        .iter()
        .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

fn decode_data<D: DeserializeOwned>(body: &Value, field: Option<&str>) -> ApiResult<D> {
    let data = body
        .get("data")
        .ok_or_else(|| ApiError::Decode("missing `data`".to_string()))?;
    let target = match field {
        Some(name) => data
            .get(name)
            .ok_or_else(|| ApiError::Decode(format!("missing `data.{}`", name)))?,
        None => data,
    };
    Ok(serde_json::from_value(target.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};
    use crate::testing::{client_with, StubTransport};

    fn stored_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::User,
            is_active: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_success_returns_body_unmodified() {
        let transport = StubTransport::new().route(Method::Get, "/auth/me", 200, r#"{"status":"success","data":{"x":1}}"#);
        let (client, _) = client_with(transport);

        let body = client.call("/auth/me", RequestOptions::default()).await.unwrap();
        assert_eq!(body, json!({"status": "success", "data": {"x": 1}}));
    }

    #[tokio::test]
    async fn test_headers_include_json_and_bearer_token() {
        let transport = StubTransport::new().route(Method::Get, "/tasks", 200, "{}");
        let (client, storage) = client_with(transport.clone());
        Session::new(storage).set_token("tok-1").unwrap();

        client
            .call("/tasks", RequestOptions::default().header("X-Trace", "abc"))
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.header("Authorization"), Some("Bearer tok-1"));
        assert_eq!(sent.header("X-Trace"), Some("abc"));
        assert_eq!(sent.url, "http://127.0.0.1:8000/api/v1/tasks");
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let transport = StubTransport::new().route(Method::Post, "/auth/login", 200, "{}");
        let (client, _) = client_with(transport.clone());

        client.call("/auth/login", RequestOptions::method(Method::Post)).await.unwrap();

        assert_eq!(transport.last_request().unwrap().header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_fixed_messages_without_detail() {
        for (status, expected) in [
            (401, "Invalid email or password"),
            (422, "Invalid input data"),
            (404, "Resource not found"),
            (500, "Server error occurred"),
            (403, "Error: 403"),
        ] {
            let transport = StubTransport::new().route(Method::Get, "/x", status, "{}");
            let (client, _) = client_with(transport);
            let err = client.call("/x", RequestOptions::default()).await.unwrap_err();
            assert_eq!(err.to_string(), expected, "status {}", status);
        }
    }

    #[tokio::test]
    async fn test_detail_used_verbatim_for_422_and_other() {
        let transport = StubTransport::new()
            .route(Method::Get, "/a", 422, r#"{"detail":"Title too short"}"#)
            .route(Method::Get, "/b", 400, r#"{"detail":"Email already registered"}"#);
        let (client, _) = client_with(transport);

        let err = client.call("/a", RequestOptions::default()).await.unwrap_err();
        assert_eq!(err, ApiError::Validation("Title too short".to_string()));

        let err = client.call("/b", RequestOptions::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_detail_ignored_for_404_and_500() {
        let transport = StubTransport::new()
            .route(Method::Get, "/a", 404, r#"{"detail":"Task not found"}"#)
            .route(Method::Get, "/b", 500, r#"{"detail":"boom"}"#);
        let (client, _) = client_with(transport);

        assert_eq!(client.call("/a", RequestOptions::default()).await.unwrap_err(), ApiError::NotFound);
        assert_eq!(client.call("/b", RequestOptions::default()).await.unwrap_err(), ApiError::Server);
    }

    #[tokio::test]
    async fn test_validation_list_is_joined() {
        let transport = StubTransport::new().route(
            Method::Post,
            "/tasks",
            422,
            r#"{"detail":[{"loc":["body","title"],"msg":"too short"},{"msg":"bad date"}]}"#,
        );
        let (client, _) = client_with(transport);

        let err = client.call("/tasks", RequestOptions::method(Method::Post)).await.unwrap_err();
        assert_eq!(err.to_string(), "too short; bad date");
    }

    #[tokio::test]
    async fn test_non_json_error_body_uses_fallback_detail() {
        let transport = StubTransport::new().route(Method::Get, "/x", 502, "<html>Bad Gateway</html>");
        let (client, _) = client_with(transport);

        let err = client.call("/x", RequestOptions::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Server error occurred");
    }

    #[tokio::test]
    async fn test_401_with_token_clears_session() {
        let transport = StubTransport::new().route(Method::Get, "/tasks", 401, r#"{"detail":"expired"}"#);
        let (client, storage) = client_with(transport);
        Session::new(storage.clone()).begin("tok", &stored_user()).unwrap();

        let err = client.call("/tasks", RequestOptions::default()).await.unwrap_err();

        assert_eq!(err.to_string(), "Session expired. Please login again.");
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_401_without_token_leaves_storage() {
        let transport = StubTransport::new().route(Method::Post, "/auth/login", 401, "{}");
        let (client, storage) = client_with(transport);
        Session::new(storage.clone()).set_user(&stored_user()).unwrap();

        let err = client.call("/auth/login", RequestOptions::method(Method::Post)).await.unwrap_err();

        assert_eq!(err, ApiError::InvalidCredentials);
        assert!(Session::new(storage).get_user().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport = StubTransport::new();
        let (client, _) = client_with(transport);

        let err = client.call("/unrouted", RequestOptions::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_call_data_reports_missing_field() {
        let transport = StubTransport::new().route(Method::Get, "/tasks/1", 200, r#"{"data":{}}"#);
        let (client, _) = client_with(transport);

        let result: ApiResult<crate::models::Task> =
            client.call_data("/tasks/1", RequestOptions::default(), Some("task")).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
