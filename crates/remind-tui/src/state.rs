//! Application state.
//!
//! One struct owns every screen's state. Only the reducer mutates it; the
//! renderer reads it.

use std::time::{Duration, Instant};

use remind_core::models::{GroupId, User};

use crate::effects::UiEffect;
use crate::groups::GroupsState;
use crate::login::LoginState;
use crate::overlays::Overlay;
use crate::reminders::RemindersState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Groups,
    Reminders { group_id: GroupId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Transient notification shown over the current screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    /// Who is logged in, mirrored from the session store.
    pub user: Option<User>,
    pub login: LoginState,
    pub groups: GroupsState,
    pub reminders: RemindersState,
    pub overlay: Option<Overlay>,
    pub toast: Option<Toast>,
    pub toast_duration: Duration,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    /// A rehydrated `user` starts on Groups, otherwise on Login.
    pub fn new(user: Option<User>, toast_duration: Duration) -> Self {
        let screen = if user.is_some() {
            Screen::Groups
        } else {
            Screen::Login
        };
        Self {
            screen,
            user,
            login: LoginState::default(),
            groups: GroupsState::default(),
            reminders: RemindersState::default(),
            overlay: None,
            toast: None,
            toast_duration,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Effects for the initial screen.
    pub fn start(&mut self) -> Vec<UiEffect> {
        self.navigate(self.screen)
    }

    /// Switches screens, resetting the target screen's state and returning
    /// the loads it needs.
    pub fn navigate(&mut self, screen: Screen) -> Vec<UiEffect> {
        self.screen = screen;
        self.overlay = None;
        match screen {
            Screen::Login => {
                self.login = LoginState::default();
                vec![]
            }
            Screen::Groups => {
                self.groups = GroupsState::loading();
                vec![UiEffect::LoadGroups]
            }
            Screen::Reminders { group_id } => {
                self.reminders = RemindersState::loading();
                vec![UiEffect::LoadReminders(group_id)]
            }
        }
    }

    /// Forgets the user and every screen's data, landing on Login.
    pub fn reset_to_login(&mut self) {
        self.user = None;
        self.groups = GroupsState::default();
        self.reminders = RemindersState::default();
        self.navigate(Screen::Login);
    }

    pub fn is_on_reminders(&self, group_id: GroupId) -> bool {
        self.screen == Screen::Reminders { group_id }
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn toast_success(&mut self, message: impl Into<String>) {
        self.show_toast(ToastKind::Success, message);
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.show_toast(ToastKind::Error, message);
    }

    /// Drops the toast once it has been visible for `toast_duration`.
    pub fn expire_toast(&mut self) {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.shown_at.elapsed() >= self.toast_duration)
        {
            self.toast = None;
        }
    }
}
