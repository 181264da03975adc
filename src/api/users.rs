//! Account endpoints.

use crate::models::{AuthTokens, LoginRequest, NewUser, UpdateUser, User};

use super::{ApiResult, Gateway};

pub struct UsersApi {
    gateway: Gateway,
}

impl UsersApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn register(&self, new_user: &NewUser) -> ApiResult<User> {
        Ok(self.gateway.post("/users/register", new_user).await?.result)
    }

    /// Exchange credentials for a token pair.
    ///
    /// The tokens are returned, not stored: the caller persists them via
    /// `SessionStore::store_tokens`. Feature modules carry no credential
    /// logic of their own.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthTokens> {
        Ok(self.gateway.post("/users/login", request).await?.result)
    }

    pub async fn me(&self) -> ApiResult<User> {
        Ok(self.gateway.get("/users/me").await?.result)
    }

    pub async fn update_profile(&self, user_id: i64, update: &UpdateUser) -> ApiResult<User> {
        let path = format!("/users/{}", user_id);
        Ok(self.gateway.put(&path, update).await?.result)
    }
}
