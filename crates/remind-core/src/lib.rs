//! Core remind library (data model, session, HTTP client, gateways, config).

pub mod api;
pub mod config;
pub mod http;
pub mod logging;
pub mod models;
pub mod session;

pub use http::{ApiClient, ApiError, ApiResult, AuthFailure, AuthFailureHook};
pub use reqwest::Method;
pub use session::SessionStore;
