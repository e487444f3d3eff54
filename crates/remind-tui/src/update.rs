//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use remind_core::AuthFailure;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{OverlayTransition, OverlayUpdate, Submit};
use crate::state::{AppState, Screen, ToastKind};
use crate::{groups, login, reminders};

const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            app.expire_toast();
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::AuthCompleted { mode, result } => login::handle_auth_result(app, mode, result),
        UiEvent::Groups(event) => groups::handle_event(app, event),
        UiEvent::Reminders(event) => reminders::handle_event(app, event),
        UiEvent::SessionExpired(failure) => handle_session_expired(app, &failure),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        return apply_overlay_update(app, update);
    }

    if key.code == KeyCode::Esc && app.toast.is_some() {
        app.toast = None;
        return vec![];
    }

    match app.screen {
        Screen::Login => login::handle_key(app, key),
        Screen::Groups => groups::handle_key(app, key),
        Screen::Reminders { group_id } => reminders::handle_key(app, group_id, key),
    }
}

fn handle_paste(app: &mut AppState, text: &str) {
    if let Some(overlay) = app.overlay.as_mut() {
        overlay.handle_paste(text);
    } else if app.screen == Screen::Login {
        login::handle_paste(&mut app.login, text);
    }
}

/// Closes the overlay if asked to, then hands any submission to the feature
/// that owns it.
fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    if update.transition == OverlayTransition::Close {
        app.overlay = None;
    }

    match update.submit {
        None => vec![],
        Some(Submit::CreateGroup(group)) => groups::submit_create(group),
        Some(Submit::CreateReminder { group_id, reminder }) => {
            reminders::submit_create(group_id, reminder)
        }
        Some(Submit::DeleteGroup(id)) => groups::confirm_delete(app, id),
        Some(Submit::DeleteReminder { group_id, id }) => {
            reminders::confirm_delete(app, group_id, id)
        }
    }
}

/// The client has already cleared the stored session.
fn handle_session_expired(app: &mut AppState, failure: &AuthFailure) -> Vec<UiEffect> {
    tracing::info!(method = %failure.method, path = %failure.path, "session expired");

    if app.screen == Screen::Login {
        // A rejected login; the form reports it inline.
        app.user = None;
        return vec![];
    }

    app.reset_to_login();
    app.show_toast(ToastKind::Info, SESSION_EXPIRED_MESSAGE);
    vec![]
}
