//! Login reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use remind_core::ApiResult;
use remind_core::models::{Credentials, Session};

use super::{AuthMode, LoginState};
use crate::effects::UiEffect;
use crate::state::{AppState, Screen};

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let login = &mut app.login;
    if login.submitting {
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            login.toggle_focus();
            vec![]
        }
        KeyCode::Char('r') if ctrl => {
            login.mode = login.mode.toggled();
            login.error = None;
            vec![]
        }
        KeyCode::Enter => submit(login),
        _ => {
            if login.focused_field_mut().handle_key(key) {
                login.error = None;
            }
            vec![]
        }
    }
}

pub fn handle_paste(login: &mut LoginState, text: &str) {
    if !login.submitting {
        login.focused_field_mut().insert_str(text);
    }
}

fn submit(login: &mut LoginState) -> Vec<UiEffect> {
    if login.username.is_blank() || login.password.value().is_empty() {
        login.error = Some("Username and password are required".to_string());
        return vec![];
    }

    login.submitting = true;
    login.error = None;
    vec![UiEffect::Authenticate {
        mode: login.mode,
        credentials: Credentials::new(login.username.trimmed(), login.password.value()),
    }]
}

/// Applies a login/registration result.
pub fn handle_auth_result(
    app: &mut AppState,
    mode: AuthMode,
    result: ApiResult<Session>,
) -> Vec<UiEffect> {
    if app.screen != Screen::Login || !app.login.submitting {
        tracing::debug!("discarding auth result for inactive login form");
        return vec![];
    }

    match result {
        Ok(session) => {
            app.user = Some(session.user.clone());
            let mut effects = vec![UiEffect::StoreSession(session)];
            effects.extend(app.navigate(Screen::Groups));
            effects
        }
        Err(err) => {
            app.login.submitting = false;
            app.login.error = Some(err.user_message(mode.fallback_error()));
            vec![]
        }
    }
}
