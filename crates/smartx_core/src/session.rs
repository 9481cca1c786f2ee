//! crates/smartx_core/src/session.rs
//!
//! The Session/Role Resolver. A two-state machine (Anonymous, Authenticated)
//! whose only source of truth is the persisted session record. The role is
//! trusted as stored; nothing here verifies it against a server.

use crate::domain::{Role, User};
use crate::ports::PortError;
use crate::preferences::PreferenceStore;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("A user is already signed in on this device")]
    AlreadyAuthenticated,
    #[error("No user is signed in on this device")]
    NotAuthenticated,
    #[error("Session storage error: {0}")]
    Port(#[from] PortError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(user) => Some(user),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }
}

#[derive(Clone)]
pub struct SessionResolver {
    prefs: PreferenceStore,
}

impl SessionResolver {
    pub fn new(prefs: PreferenceStore) -> Self {
        Self { prefs }
    }

    pub async fn state(&self) -> SessionState {
        match self.prefs.session().await {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.prefs.session().await
    }

    /// Anonymous -> Authenticated. A signed-in device must log out first.
    pub async fn login(&self, user: User) -> Result<User, SessionError> {
        if self.prefs.session().await.is_some() {
            return Err(SessionError::AlreadyAuthenticated);
        }
        self.prefs.set_session(&user).await?;
        info!(user_id = %user.id, role = user.role.as_str(), "Session started.");
        Ok(user)
    }

    /// Authenticated -> Anonymous. Clears the persisted session key.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let Some(user) = self.prefs.session().await else {
            return Err(SessionError::NotAuthenticated);
        };
        self.prefs.clear_session().await?;
        info!(user_id = %user.id, "Session ended.");
        Ok(())
    }
}
