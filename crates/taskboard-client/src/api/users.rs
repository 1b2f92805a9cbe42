//! User Endpoints (admin)

use super::client::{ApiClient, RequestOptions};
use super::error::ApiResult;
use super::query::QueryBuilder;
use super::transport::{HttpTransport, Method};
use crate::models::{User, UserFilters, UserPage, UserUpdate};
use crate::session::SessionStorage;

pub struct UsersApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: HttpTransport, S: SessionStorage> UsersApi<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    /// `GET /users?role&is_active&page&limit` → `{data:{users, pagination}}`
    pub async fn get_users(&self, filters: &UserFilters) -> ApiResult<UserPage> {
        self.client
            .call_data(&user_list_path(filters), RequestOptions::default(), None)
            .await
    }

    pub async fn get_user(&self, id: &str) -> ApiResult<User> {
        self.client
            .call_data(&format!("/users/{}", id), RequestOptions::default(), Some("user"))
            .await
    }

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ApiResult<User> {
        let options = RequestOptions::json(Method::Put, update)?;
        self.client.call_data(&format!("/users/{}", id), options, Some("user")).await
    }

    pub async fn delete_user(&self, id: &str) -> ApiResult<()> {
        self.client
            .call(&format!("/users/{}", id), RequestOptions::method(Method::Delete))
            .await
            .map(|_| ())
    }
}

fn user_list_path(filters: &UserFilters) -> String {
    QueryBuilder::new()
        .push("role", filters.role.map(|r| r.as_str()))
        .push("is_active", filters.is_active)
        .push("page", filters.page.filter(|page| *page > 0))
        .push("limit", filters.limit.filter(|limit| *limit > 0))
        .apply("/users")
}
