//! Resource gateways: one method per endpoint, no retries.

mod auth;
mod groups;
mod reminders;

pub use auth::AuthApi;
pub use groups::GroupsApi;
pub use reminders::RemindersApi;

use crate::http::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn groups(&self) -> GroupsApi<'_> {
        GroupsApi::new(self)
    }

    pub fn reminders(&self) -> RemindersApi<'_> {
        RemindersApi::new(self)
    }
}
