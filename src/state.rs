//! # State
//!
//! [`AuthorizationPresenter`] answers `is_authorized` and `user_name` by matching
//! on its current [`AuthorizationState`] instead of keeping flags in sync. The
//! user name only exists inside the `Authorized` variant, so it cannot linger
//! after logout.

use std::fmt;
use tracing::info;

/// Name reported while nobody is logged in.
pub const UNKNOWN_USER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthorizationState {
    #[default]
    Unauthorized,
    Authorized { user_name: String },
}

#[derive(Debug, Clone, Default)]
pub struct AuthorizationPresenter {
    state: AuthorizationState,
}

impl AuthorizationPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthorizationState {
        &self.state
    }

    pub fn is_authorized(&self) -> bool {
        match self.state {
            AuthorizationState::Authorized { .. } => true,
            AuthorizationState::Unauthorized => false,
        }
    }

    pub fn user_name(&self) -> &str {
        match &self.state {
            AuthorizationState::Authorized { user_name } => user_name.as_str(),
            AuthorizationState::Unauthorized => UNKNOWN_USER,
        }
    }

    /// Switch to `Authorized`, replacing any user already logged in.
    pub fn login_user(&mut self, user_name: impl Into<String>) {
        let user_name = user_name.into();
        info!(%user_name, "Logging in");
        self.state = AuthorizationState::Authorized { user_name };
    }

    pub fn logout_user(&mut self) {
        info!(user_name = %self.user_name(), "Logging out");
        self.state = AuthorizationState::Unauthorized;
    }
}

impl fmt::Display for AuthorizationPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User '{}' is logged in: {}",
            self.user_name(),
            self.is_authorized()
        )
    }
}
