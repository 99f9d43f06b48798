use async_trait::async_trait;
use serde::Deserialize;

use enrollsync_core::catalog::User;
use enrollsync_core::storage::{Page, PaginationMeta, Result, UserRepository};

use super::UpstreamClient;

/// Body of `GET /v1/users`.
#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<User>,
    meta: PaginationMeta,
}

impl From<UsersResponse> for Page<User> {
    fn from(response: UsersResponse) -> Self {
        Page {
            items: response.users,
            meta: response.meta,
        }
    }
}

#[async_trait]
impl UserRepository for UpstreamClient {
    async fn get_users(&self) -> Result<Vec<User>> {
        self.fetch_all::<UsersResponse, User>("Users", "/v1/users")
            .await
    }
}
