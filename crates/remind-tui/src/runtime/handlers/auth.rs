use remind_core::models::{Credentials, Session};
use remind_core::{ApiClient, SessionStore};

use crate::events::UiEvent;
use crate::login::AuthMode;

pub async fn authenticate(client: ApiClient, mode: AuthMode, credentials: Credentials) -> UiEvent {
    let auth = client.auth();
    let result = match mode {
        AuthMode::Login => auth.login(&credentials).await,
        AuthMode::Register => auth.register(&credentials).await,
    };
    if let Err(err) = &result {
        tracing::info!(?mode, username = %credentials.username, error = %err, "authentication failed");
    }
    UiEvent::AuthCompleted { mode, result }
}

/// Runs inline: the token must be in place before the next request goes out.
pub fn store_session(store: &SessionStore, session: Session) {
    if let Err(err) = store.login(session.user, session.token) {
        tracing::warn!(error = %err, "session kept in memory only");
    }
}

pub fn clear_session(store: &SessionStore) {
    if let Err(err) = store.logout() {
        tracing::warn!(error = %err, "failed to clear stored session");
    }
}
