//! Preferences persistence trait abstraction.
//!
//! The preference store writes its whole snapshot through this trait on
//! every mutation, so a backend only has to load and save one document.

use crate::preferences::{PreferencesError, PreferencesSnapshot};

/// Trait for loading and saving the persisted preference snapshot.
///
/// Implementations are [`FilePreferences`](crate::adapters::FilePreferences)
/// for the JSON file under the data directory and
/// [`InMemoryPreferences`](crate::adapters::mock::InMemoryPreferences) for tests.
pub trait PreferencesBackend: Send + Sync {
    /// Load the stored snapshot.
    ///
    /// # Returns
    /// - `Ok(Some(snapshot))` if a snapshot exists and was read
    /// - `Ok(None)` if nothing has been stored yet
    /// - `Err(error)` if the snapshot exists but could not be read
    fn load(&self) -> Result<Option<PreferencesSnapshot>, PreferencesError>;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: &PreferencesSnapshot) -> Result<(), PreferencesError>;

    /// Short description of where the snapshot lives, for logs.
    fn describe(&self) -> String;
}
