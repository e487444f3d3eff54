//! HTTP client for the reminders API.
//!
//! Every request carries the session's bearer token when one exists. Every
//! 401 response tears the session down and notifies the registered
//! [`AuthFailureHook`]s, whichever gateway issued the request. All other
//! failures are handed back to the caller as [`ApiError`] without retries.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::session::SessionStore;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("remind/", env!("CARGO_PKG_VERSION"));

/// Default API base URL (local development server).
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

// ============================================================================
// Errors
// ============================================================================

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Network error: {0}")]
    Transport(String),

    /// 401. The session has already been cleared by the client.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Any other 4xx, usually a validation or business error.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request rejected"))]
    Rejected { status: u16, message: Option<String> },

    /// 5xx.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("server error"))]
    Server { status: u16, message: Option<String> },

    /// The response body was not what the endpoint promises.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let status_code = status.as_u16();
        if status == StatusCode::UNAUTHORIZED {
            Self::Unauthorized {
                message: message.unwrap_or_else(|| "Unauthorized".to_string()),
            }
        } else if status.is_server_error() {
            Self::Server {
                status: status_code,
                message,
            }
        } else {
            Self::Rejected {
                status: status_code,
                message,
            }
        }
    }

    /// Message provided by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } => Some(message),
            Self::Rejected { message, .. } | Self::Server { message, .. } => message.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Server message when available, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::Rejected { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Pulls `error` out of a JSON error body (`{"error": "..."}`).
fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

// ============================================================================
// Auth failure hook
// ============================================================================

/// Details of a request the server rejected as unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFailure {
    pub method: Method,
    pub path: String,
    pub message: Option<String>,
}

/// Called after a 401 has cleared the session.
///
/// The UI uses this to route back to the login screen; tests use it to
/// observe the teardown.
pub trait AuthFailureHook: Send + Sync {
    fn on_auth_failure(&self, failure: &AuthFailure);
}

impl<F> AuthFailureHook for F
where
    F: Fn(&AuthFailure) + Send + Sync,
{
    fn on_auth_failure(&self, failure: &AuthFailure) {
        self(failure);
    }
}

// ============================================================================
// Client
// ============================================================================

/// Reminders API client. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    hooks: Vec<Arc<dyn AuthFailureHook>>,
}

impl ApiClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, None, session)
    }

    /// Creates a client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: &str,
        timeout: Option<Duration>,
        session: Arc<SessionStore>,
    ) -> anyhow::Result<Self> {
        let trimmed = base_url.trim();
        url::Url::parse(trimmed).with_context(|| format!("Invalid API base URL: {trimmed}"))?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: trimmed.trim_end_matches('/').to_string(),
            session,
            hooks: Vec::new(),
        })
    }

    /// Registers a hook fired on every 401.
    #[must_use]
    pub fn with_auth_failure_hook(mut self, hook: impl AuthFailureHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        decode(response).await
    }

    /// DELETE; the `{"message": ...}` body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Response> {
        let sent_token = self.session.token();
        let mut builder = self.request(method.clone(), path, sent_token.as_deref());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::warn!(%method, path, error = %err, "request failed");
            ApiError::Transport(err.to_string())
        })?;

        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "api response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);

        if status == StatusCode::UNAUTHORIZED {
            self.handle_auth_failure(method, path, message.clone(), sent_token.as_deref());
        }

        Err(ApiError::from_status(status, message))
    }

    /// Tears down only the session the request was sent under; a 401 that
    /// lands after a fresh login leaves the new session alone.
    fn handle_auth_failure(
        &self,
        method: Method,
        path: &str,
        message: Option<String>,
        sent_token: Option<&str>,
    ) {
        if self.session.token().as_deref() != sent_token {
            tracing::debug!(%method, path, "ignoring 401 for a superseded session");
            return;
        }

        tracing::warn!(%method, path, "authentication rejected, clearing session");
        if let Err(err) = self.session.logout() {
            tracing::warn!(error = %err, "failed to clear stored session");
        }

        let failure = AuthFailure {
            method,
            path: path.to_string(),
            message,
        };
        for hook in &self.hooks {
            hook.on_auth_failure(&failure);
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
