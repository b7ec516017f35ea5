//! Persisted client preferences: the favorite set and the selected theme.
//!
//! The store is owned by the app and handed a [`PreferencesBackend`] at
//! construction. Every mutation writes the full snapshot back; a failed write
//! is logged and surfaced as a notice while the in-memory state stays as the
//! user left it.

mod error;
mod store;

pub use error::PreferencesError;
pub use store::PreferenceStore;

use serde::{Deserialize, Serialize};

use crate::models::{BossId, ThemeId};

/// On-disk shape of the preferences file.
///
/// Missing keys fall back to their defaults so older or hand-edited files
/// still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesSnapshot {
    /// Favorited boss ids, sorted ascending
    pub favorites: Vec<BossId>,
    pub theme: ThemeId,
}
