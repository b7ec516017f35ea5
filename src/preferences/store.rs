use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use super::PreferencesSnapshot;
use crate::models::{BossId, ThemeId};
use crate::traits::PreferencesBackend;

/// Favorites and theme, restored at startup and written through on change.
pub struct PreferenceStore {
    backend: Box<dyn PreferencesBackend>,
    favorites: BTreeSet<BossId>,
    theme: ThemeId,
    /// One-line message about the last failed write, shown in the status line
    notice: Option<String>,
}

impl PreferenceStore {
    /// Restore the store from `backend`.
    ///
    /// A missing snapshot yields defaults. An unreadable or malformed one is
    /// logged and also yields defaults; the next mutation overwrites it.
    pub fn load(backend: Box<dyn PreferencesBackend>) -> Self {
        let snapshot = match backend.load() {
            Ok(Some(snapshot)) => {
                info!(
                    favorites = snapshot.favorites.len(),
                    theme = %snapshot.theme,
                    "Restored preferences from {}",
                    backend.describe()
                );
                snapshot
            }
            Ok(None) => {
                debug!("No preferences at {}, using defaults", backend.describe());
                PreferencesSnapshot::default()
            }
            Err(e) => {
                warn!(code = e.error_code(), "Ignoring stored preferences: {}", e);
                PreferencesSnapshot::default()
            }
        };

        Self {
            backend,
            favorites: snapshot.favorites.into_iter().collect(),
            theme: snapshot.theme,
            notice: None,
        }
    }

    pub fn is_favorite(&self, id: BossId) -> bool {
        self.favorites.contains(&id)
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle_favorite(&mut self, id: BossId) -> bool {
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        debug!(boss_id = %id, now_favorite, "Toggled favorite");
        self.persist();
        now_favorite
    }

    pub fn current_theme(&self) -> ThemeId {
        self.theme
    }

    /// Move to the next theme in the cycle and return it.
    pub fn advance_theme(&mut self) -> ThemeId {
        self.theme = self.theme.next();
        debug!(theme = %self.theme, "Advanced theme");
        self.persist();
        self.theme
    }

    /// Favorited ids in ascending order.
    pub fn favorites(&self) -> impl Iterator<Item = BossId> + '_ {
        self.favorites.iter().copied()
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn snapshot(&self) -> PreferencesSnapshot {
        PreferencesSnapshot {
            favorites: self.favorites.iter().copied().collect(),
            theme: self.theme,
        }
    }

    /// Message describing the last failed write, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn persist(&mut self) {
        match self.backend.save(&self.snapshot()) {
            Ok(()) => self.notice = None,
            Err(e) => {
                warn!(
                    code = e.error_code(),
                    "Failed to save preferences to {}: {}",
                    self.backend.describe(),
                    e
                );
                self.notice = Some("Preferences could not be saved".to_string());
            }
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("backend", &self.backend.describe())
            .field("favorites", &self.favorites)
            .field("theme", &self.theme)
            .field("notice", &self.notice)
            .finish()
    }
}
