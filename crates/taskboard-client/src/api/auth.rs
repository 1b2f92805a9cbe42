//! Auth Endpoints

use super::client::{ApiClient, RequestOptions};
use super::error::ApiResult;
use super::transport::{HttpTransport, Method};
use crate::models::{AuthPayload, LoginRequest, RegisterRequest, User};
use crate::session::SessionStorage;

pub struct AuthApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: HttpTransport, S: SessionStorage> AuthApi<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    /// `POST /auth/register` → `{data:{user,token}}`
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthPayload> {
        let options = RequestOptions::json(Method::Post, request)?;
        self.client.call_data("/auth/register", options, None).await
    }

    /// `POST /auth/login` → `{data:{user,token}}`
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthPayload> {
        let options = RequestOptions::json(Method::Post, request)?;
        self.client.call_data("/auth/login", options, None).await
    }

    /// `GET /auth/me` → `{data:{user}}`
    pub async fn get_me(&self) -> ApiResult<User> {
        self.client.call_data("/auth/me", RequestOptions::default(), Some("user")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use serde_json::Value;
    use crate::testing::{client_with, StubTransport};

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let transport = StubTransport::new().route(
            Method::Post,
            "/auth/login",
            200,
            r#"{"status":"success","data":{"user":{"id":"u1","name":"Ada","email":"ada@example.com","role":"user"},"token":"tok"}}"#,
        );
        let (client, _) = client_with(transport.clone());

        let payload = client
            .auth()
            .login(&LoginRequest { email: "ada@example.com".into(), password: "secret1".into() })
            .await
            .unwrap();

        assert_eq!(payload.token, "tok");
        assert_eq!(payload.user.name, "Ada");
        let sent = transport.last_request().unwrap();
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["password"], "secret1");
    }

    #[tokio::test]
    async fn test_register_sends_role() {
        let transport = StubTransport::new().route(
            Method::Post,
            "/auth/register",
            201,
            r#"{"data":{"user":{"id":"u2","name":"Bo","email":"bo@example.com","role":"admin"},"token":"t2"}}"#,
        );
        let (client, _) = client_with(transport.clone());

        let payload = client
            .auth()
            .register(&RegisterRequest {
                name: "Bo".into(),
                email: "bo@example.com".into(),
                password: "secret1".into(),
                role: Role::Admin,
            })
            .await
            .unwrap();

        assert_eq!(payload.user.role, Role::Admin);
        let body: Value = serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["role"], "admin");
    }

    #[tokio::test]
    async fn test_get_me_reads_nested_user() {
        let transport = StubTransport::new().route(
            Method::Get,
            "/auth/me",
            200,
            r#"{"data":{"user":{"id":"u1","name":"Ada","email":"ada@example.com","role":"user","is_active":true}}}"#,
        );
        let (client, _) = client_with(transport);

        let user = client.auth().get_me().await.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.is_active, Some(true));
    }
}
