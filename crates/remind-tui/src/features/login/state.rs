use crate::common::TextField;

/// Which endpoint the form submits to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }

    /// Shown when the server gives no message.
    pub fn fallback_error(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone)]
pub struct LoginState {
    pub mode: AuthMode,
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
    /// A request is in flight; input is locked.
    pub submitting: bool,
    /// Inline error under the form.
    pub error: Option<String>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            username: TextField::new(),
            password: TextField::masked(),
            focus: LoginField::Username,
            submitting: false,
            error: None,
        }
    }
}

impl LoginState {
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
}
