//! Inbox channel.
//!
//! Spawned handlers and the client's auth-failure hook send their events
//! here; the runtime drains it every frame.

use remind_core::{AuthFailure, AuthFailureHook};
use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

pub fn channel() -> (UiEventSender, UiEventReceiver) {
    mpsc::unbounded_channel()
}

/// Forwards every 401 to the reducer as `UiEvent::SessionExpired`.
pub fn session_expired_hook(tx: UiEventSender) -> impl AuthFailureHook + 'static {
    move |failure: &AuthFailure| {
        let _ = tx.send(UiEvent::SessionExpired(failure.clone()));
    }
}
