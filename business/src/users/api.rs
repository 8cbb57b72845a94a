//! Users API client.
//!
//! Performs network IO against the users endpoint. The store never calls this directly;
//! it goes through [`UsersFetcher`] so tests and alternative transports can stand in.

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;
use ustr::Ustr;

use crate::BusinessConfig;
use crate::http::Client;
use crate::users::model::User;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse users response: {0}")]
    Parse(String),
}

/// A typed API result.
pub type ApiResult<T> = Result<T, UsersApiError>;

/// GET `{api_base_url}/users`
pub async fn list_users(users_url: &str) -> ApiResult<Vec<User>> {
    let response = Client::get(users_url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.message))?;

    if !response.is_success() {
        return Err(UsersApiError::Status(response.status));
    }

    response
        .json()
        .map_err(|e| UsersApiError::Parse(e.to_string()))
}

/// Source of the full user collection.
#[async_trait]
pub trait UsersFetcher: Send + Sync + Debug {
    async fn fetch_users(&self) -> ApiResult<Vec<User>>;
}

/// [`UsersFetcher`] backed by [`list_users`].
#[derive(Debug, Clone)]
pub struct HttpUsersFetcher {
    users_url: Ustr,
}

impl HttpUsersFetcher {
    pub fn new(users_url: Ustr) -> Self {
        Self { users_url }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(config.users_url())
    }

    pub fn users_url(&self) -> Ustr {
        self.users_url
    }
}

#[async_trait]
impl UsersFetcher for HttpUsersFetcher {
    async fn fetch_users(&self) -> ApiResult<Vec<User>> {
        list_users(self.users_url.as_str()).await
    }
}
