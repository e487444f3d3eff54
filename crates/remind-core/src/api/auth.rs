use crate::http::{ApiClient, ApiResult};
use crate::models::{Credentials, Session};

/// `/auth/*` endpoints.
///
/// These only talk to the server; storing the returned session is up to the
/// caller.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/register`
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<Session> {
        self.client.post_json("/auth/register", credentials).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Session> {
        self.client.post_json("/auth/login", credentials).await
    }
}
