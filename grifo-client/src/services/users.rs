//! Users API

use crate::{ClientResult, HttpClient};
use shared::models::user::{User, UserCreate, UserUpdate};
use shared::response::ApiResponse;

/// Dashboard account management endpoints
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    http: &'a HttpClient,
}

impl<'a> UserService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// All user accounts
    pub async fn list(&self) -> ClientResult<Vec<User>> {
        let resp: ApiResponse<Vec<User>> = self.http.get("/users").await?;
        HttpClient::require_data(resp, "users")
    }

    /// Create a user account
    pub async fn create(&self, user: &UserCreate) -> ClientResult<User> {
        let resp: ApiResponse<User> = self.http.post("/users", user).await?;
        HttpClient::require_data(resp, "user")
    }

    /// Update a user account
    pub async fn update(&self, id: i64, changes: &UserUpdate) -> ClientResult<User> {
        let resp: ApiResponse<User> = self.http.put(&format!("/users/{id}"), changes).await?;
        HttpClient::require_data(resp, "user")
    }

    /// Deactivate a user account
    pub async fn deactivate(&self, id: i64) -> ClientResult<User> {
        self.update(
            id,
            &UserUpdate {
                username: None,
                password: None,
                role: None,
                is_active: Some(false),
            },
        )
        .await
    }
}
