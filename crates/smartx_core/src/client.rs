//! crates/smartx_core/src/client.rs
//!
//! `SmartxClient` wires the Preference Store, the Session/Role Resolver, the
//! View Router and the Assist Client together. It is what a UI shell (or the
//! companion service) holds; each dependency is injected, never global.

use crate::assist::AssistClient;
use crate::domain::{Language, Preferences, Theme, User};
use crate::onboarding::{OnboardingError, OnboardingForm};
use crate::ports::{KeyValueStore, PortError, TextGenerationService};
use crate::preferences::PreferenceStore;
use crate::router::{self, Destination, NavItem};
use crate::screens::{self, Screen, ScreenQuery};
use crate::session::{SessionError, SessionResolver};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Onboarding(#[from] OnboardingError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Port(#[from] PortError),
}

/// Everything the shell needs to paint one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedScreen {
    /// Canonical path of the routed screen. While signed out the onboarding
    /// screen is served under the requested path, so the shell can return
    /// there after sign-in.
    pub path: String,
    #[serde(flatten)]
    pub screen: Screen,
    /// Bottom navigation; absent while signed out.
    pub navigation: Option<Vec<NavItem>>,
    pub preferences: Preferences,
}

#[derive(Clone)]
pub struct SmartxClient {
    prefs: PreferenceStore,
    sessions: SessionResolver,
    assist: AssistClient,
}

impl SmartxClient {
    pub fn new(store: Arc<dyn KeyValueStore>, generator: Arc<dyn TextGenerationService>) -> Self {
        let prefs = PreferenceStore::new(store);
        Self {
            sessions: SessionResolver::new(prefs.clone()),
            prefs,
            assist: AssistClient::new(generator),
        }
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.prefs
    }

    pub fn sessions(&self) -> &SessionResolver {
        &self.sessions
    }

    pub fn assist(&self) -> &AssistClient {
        &self.assist
    }

    /// Routes `path` against the current session and builds its view-model.
    pub async fn render(&self, path: &str, query: &ScreenQuery) -> RenderedScreen {
        let state = self.sessions.state().await;
        let preferences = self.prefs.preferences().await;

        match (router::resolve(&state, path), state.user()) {
            (Destination::Screen(route), Some(user)) => {
                let favorites = self.prefs.favorites().await;
                RenderedScreen {
                    path: route.path(),
                    screen: screens::build(&route, user, preferences, &favorites, query),
                    navigation: Some(router::navigation(&route)),
                    preferences,
                }
            }
            _ => RenderedScreen {
                path: path.to_string(),
                screen: Screen::Onboarding(screens::onboarding(preferences.language)),
                navigation: None,
                preferences,
            },
        }
    }

    /// Validates the onboarding form and starts a session for the synthesized user.
    pub async fn sign_in(&self, form: &OnboardingForm) -> Result<User, ClientError> {
        let language = self.prefs.language().await;
        let user = form.submit(language)?;
        Ok(self.sessions.login(user).await?)
    }

    pub async fn sign_out(&self) -> Result<(), ClientError> {
        Ok(self.sessions.logout().await?)
    }

    pub async fn toggle_theme(&self) -> Result<Theme, ClientError> {
        Ok(self.prefs.toggle_theme().await?)
    }

    pub async fn toggle_language(&self) -> Result<Language, ClientError> {
        Ok(self.prefs.toggle_language().await?)
    }

    pub async fn toggle_favorite(&self, tutor_id: &str) -> Result<bool, ClientError> {
        Ok(self.prefs.toggle_favorite(tutor_id).await?)
    }
}
