//! Session endpoints: current user, login, and the two registration flows.

use std::sync::Arc;

use serde_json::json;

use askboard_types::error::ApiError;
use askboard_types::user::{User, UserFormValues};

use crate::client::ApiClient;

#[derive(Clone)]
pub struct UserClient {
    client: Arc<ApiClient>,
}

impl UserClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /auth/me` -- the user owning the stored token.
    pub async fn current(&self) -> Result<User, ApiError> {
        self.client.post("/auth/me", &json!({})).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, form: &UserFormValues) -> Result<User, ApiError> {
        self.client.post("/auth/login", form).await
    }

    /// `POST /auth/signupadmin`
    pub async fn register_admin(&self, form: &UserFormValues) -> Result<User, ApiError> {
        self.client.post("/auth/signupadmin", form).await
    }

    /// `POST /auth/signupuser`
    pub async fn register_user(&self, form: &UserFormValues) -> Result<User, ApiError> {
        self.client.post("/auth/signupuser", form).await
    }
}

#[cfg(test)]
mod tests {
    use askboard_types::http::{Method, RawResponse, RequestBody};
    use serde_json::json;

    use super::*;
    use crate::test_support::Harness;

    #[tokio::test]
    async fn current_posts_empty_object_with_token() {
        let h = Harness::new();
        h.store.insert("jwt", "tok");
        h.transport.respond(RawResponse::new(
            200,
            json!({"username": "bob", "displayName": "Bob", "token": "tok"}),
        ));

        let user = UserClient::new(h.client.clone()).current().await.unwrap();

        assert_eq!(user.username(), Some("bob"));
        let sent = h.transport.last_request();
        assert_eq!((sent.method, sent.path.as_str()), (Method::Post, "/auth/me"));
        assert_eq!(sent.body, RequestBody::Json(json!({})));
        assert_eq!(sent.header("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn login_and_register_paths() {
        let h = Harness::new();
        for _ in 0..3 {
            h.transport
                .respond(RawResponse::new(200, json!({"username": "bob", "token": "t"})));
        }
        let users = UserClient::new(h.client.clone());
        let form = UserFormValues::login("bob@example.com", "pw");

        users.login(&form).await.unwrap();
        users.register_admin(&form).await.unwrap();
        users.register_user(&form).await.unwrap();

        let paths: Vec<String> = h.transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/auth/login", "/auth/signupadmin", "/auth/signupuser"]);
        assert_eq!(
            h.transport.requests()[0].body,
            RequestBody::Json(json!({"email": "bob@example.com", "password": "pw"}))
        );
    }
}
