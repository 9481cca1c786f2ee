//! crates/smartx_core/src/preferences.rs
//!
//! The Preference Store: typed accessors over a `KeyValueStore` for the four
//! logical keys the client persists.
//!
//! Reads fail open. A missing key, a malformed value, or a failing medium all
//! yield the documented default, so rendering is never blocked by storage.
//! Writes report failures to the caller.

use crate::domain::{Language, Preferences, Theme, User};
use crate::ports::{KeyValueStore, PortError, PortResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

pub const SESSION_KEY: &str = "smartx_user";
pub const THEME_KEY: &str = "smartx_theme";
pub const LANGUAGE_KEY: &str = "smartx_lang";
pub const FAVORITES_KEY: &str = "smartx_favorites";

//=========================================================================================
// FavoriteSet
//=========================================================================================

/// The per-device set of favorited tutor ids. Persisted as a JSON list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<String>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

//=========================================================================================
// PreferenceStore
//=========================================================================================

/// Injected into every screen that reads or writes device preferences.
#[derive(Clone)]
pub struct PreferenceStore {
    kv: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Reads a raw value, treating any medium failure as absence.
    async fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Preference read failed; using default.");
                None
            }
        }
    }

    // --- Theme ---

    pub async fn theme(&self) -> Theme {
        match self.read(THEME_KEY).await {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!(key = THEME_KEY, value = %raw, "Malformed theme; using default.");
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    pub async fn set_theme(&self, theme: Theme) -> PortResult<()> {
        self.kv.set(THEME_KEY, theme.as_str()).await
    }

    /// Persists and returns the opposite theme.
    pub async fn toggle_theme(&self) -> PortResult<Theme> {
        let next = self.theme().await.toggled();
        self.set_theme(next).await?;
        debug!(theme = next.as_str(), "Theme toggled.");
        Ok(next)
    }

    // --- Language ---

    pub async fn language(&self) -> Language {
        match self.read(LANGUAGE_KEY).await {
            Some(raw) => Language::parse(&raw).unwrap_or_else(|| {
                warn!(key = LANGUAGE_KEY, value = %raw, "Malformed language; using default.");
                Language::default()
            }),
            None => Language::default(),
        }
    }

    pub async fn set_language(&self, language: Language) -> PortResult<()> {
        self.kv.set(LANGUAGE_KEY, language.as_str()).await
    }

    pub async fn toggle_language(&self) -> PortResult<Language> {
        let next = self.language().await.toggled();
        self.set_language(next).await?;
        debug!(language = next.as_str(), "Language toggled.");
        Ok(next)
    }

    pub async fn preferences(&self) -> Preferences {
        Preferences {
            theme: self.theme().await,
            language: self.language().await,
        }
    }

    // --- Session ---

    pub async fn session(&self) -> Option<User> {
        let raw = self.read(SESSION_KEY).await?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(key = SESSION_KEY, error = %e, "Malformed session record; treating as signed out.");
                None
            }
        }
    }

    pub async fn set_session(&self, user: &User) -> PortResult<()> {
        let raw = serde_json::to_string(user).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.kv.set(SESSION_KEY, &raw).await
    }

    pub async fn clear_session(&self) -> PortResult<()> {
        self.kv.remove(SESSION_KEY).await
    }

    // --- Favorites ---

    pub async fn favorites(&self) -> FavoriteSet {
        let Some(raw) = self.read(FAVORITES_KEY).await else {
            return FavoriteSet::new();
        };
        // Deserializing into a set also drops any duplicates a foreign writer left behind.
        serde_json::from_str::<FavoriteSet>(&raw).unwrap_or_else(|e| {
            warn!(key = FAVORITES_KEY, error = %e, "Malformed favorites; starting empty.");
            FavoriteSet::new()
        })
    }

    pub async fn is_favorite(&self, tutor_id: &str) -> bool {
        self.favorites().await.contains(tutor_id)
    }

    /// Read-modify-write of the whole set. Last write wins.
    pub async fn toggle_favorite(&self, tutor_id: &str) -> PortResult<bool> {
        let mut favorites = self.favorites().await;
        let now_favorite = favorites.toggle(tutor_id);
        let raw =
            serde_json::to_string(&favorites).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.kv.set(FAVORITES_KEY, &raw).await?;
        debug!(tutor_id, now_favorite, "Favorite toggled.");
        Ok(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::memory::MemoryStore;
    use async_trait::async_trait;

    fn store_with(kv: MemoryStore) -> (PreferenceStore, Arc<MemoryStore>) {
        let kv = Arc::new(kv);
        (PreferenceStore::new(kv.clone()), kv)
    }

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> PortResult<Option<String>> {
            Err(PortError::Unexpected("medium unavailable".to_string()))
        }
        async fn set(&self, _key: &str, _value: &str) -> PortResult<()> {
            Err(PortError::Unexpected("medium unavailable".to_string()))
        }
        async fn remove(&self, _key: &str) -> PortResult<()> {
            Err(PortError::Unexpected("medium unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn defaults_on_empty_store() {
        let (prefs, _) = store_with(MemoryStore::new());
        assert_eq!(prefs.theme().await, Theme::Light);
        assert_eq!(prefs.language().await, Language::En);
        assert!(prefs.session().await.is_none());
        assert!(prefs.favorites().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_values_fall_back_to_defaults() {
        let kv = MemoryStore::new()
            .with_entry(THEME_KEY, "purple")
            .with_entry(LANGUAGE_KEY, "fr")
            .with_entry(SESSION_KEY, "{not json")
            .with_entry(FAVORITES_KEY, "\"1\"");
        let (prefs, _) = store_with(kv);
        assert_eq!(prefs.theme().await, Theme::Light);
        assert_eq!(prefs.language().await, Language::En);
        assert!(prefs.session().await.is_none());
        assert!(prefs.favorites().await.is_empty());
    }

    #[tokio::test]
    async fn failing_medium_reads_default_but_writes_report() {
        let prefs = PreferenceStore::new(Arc::new(BrokenStore));
        assert_eq!(prefs.theme().await, Theme::Light);
        assert!(prefs.favorites().await.is_empty());
        assert!(prefs.set_theme(Theme::Dark).await.is_err());
        assert!(prefs.toggle_favorite("1").await.is_err());
    }

    #[tokio::test]
    async fn theme_double_toggle_restores_persisted_value() {
        let (prefs, kv) = store_with(MemoryStore::new());
        prefs.set_theme(Theme::Light).await.unwrap();

        assert_eq!(prefs.toggle_theme().await.unwrap(), Theme::Dark);
        assert_eq!(kv.get(THEME_KEY).await.unwrap().as_deref(), Some("dark"));
        assert_eq!(prefs.toggle_theme().await.unwrap(), Theme::Light);
        assert_eq!(kv.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn language_toggle_persists() {
        let (prefs, kv) = store_with(MemoryStore::new());
        assert_eq!(prefs.toggle_language().await.unwrap(), Language::Hi);
        assert_eq!(kv.get(LANGUAGE_KEY).await.unwrap().as_deref(), Some("hi"));
        assert_eq!(prefs.preferences().await.language, Language::Hi);
    }

    #[tokio::test]
    async fn favorite_toggle_is_an_involution() {
        let (prefs, _) = store_with(MemoryStore::new());
        prefs.toggle_favorite("2").await.unwrap();
        let before = prefs.favorites().await;

        for id in ["1", "2", "3", "unknown"] {
            let first = prefs.toggle_favorite(id).await.unwrap();
            let second = prefs.toggle_favorite(id).await.unwrap();
            assert_ne!(first, second);
            assert_eq!(prefs.favorites().await, before, "toggling {id} twice changed the set");
        }
    }

    #[tokio::test]
    async fn favorites_never_hold_duplicates() {
        let kv = MemoryStore::new().with_entry(FAVORITES_KEY, r#"["1","1","3"]"#);
        let (prefs, kv) = store_with(kv);
        assert_eq!(prefs.favorites().await.len(), 2);

        for id in ["3", "1", "1", "2", "3", "2", "2"] {
            prefs.toggle_favorite(id).await.unwrap();
        }
        let raw = kv.get(FAVORITES_KEY).await.unwrap().unwrap();
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn session_round_trips_and_clears() {
        let (prefs, _) = store_with(MemoryStore::new());
        let user = User {
            id: "usr_abc123def".to_string(),
            name: "Arjun Gupta".to_string(),
            role: Role::Parent,
            avatar: None,
            email: "arjun@example.com".to_string(),
        };
        prefs.set_session(&user).await.unwrap();
        assert_eq!(prefs.session().await, Some(user));
        prefs.clear_session().await.unwrap();
        assert!(prefs.session().await.is_none());
    }
}
