//! In-memory preferences backend for testing.

use std::sync::{Arc, Mutex};

use crate::preferences::{PreferencesError, PreferencesSnapshot};
use crate::traits::PreferencesBackend;

/// In-memory preferences backend for testing.
///
/// Clones share state, so a test can hand one clone to the store and keep
/// another to inspect what was written or to inject failures.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    snapshot: Arc<Mutex<Option<PreferencesSnapshot>>>,
    saves: Arc<Mutex<usize>>,
    save_should_fail: Arc<Mutex<bool>>,
    load_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds `snapshot`.
    pub fn with_snapshot(snapshot: PreferencesSnapshot) -> Self {
        let backend = Self::default();
        *backend.snapshot.lock().unwrap() = Some(snapshot);
        backend
    }

    /// Configure whether save should fail.
    pub fn fail_saves(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether load should fail.
    pub fn fail_loads(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Last successfully saved snapshot.
    pub fn stored(&self) -> Option<PreferencesSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl PreferencesBackend for InMemoryPreferences {
    fn load(&self) -> Result<Option<PreferencesSnapshot>, PreferencesError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(PreferencesError::Unavailable {
                message: "Mock load failure".to_string(),
            });
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn save(&self, snapshot: &PreferencesSnapshot) -> Result<(), PreferencesError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(PreferencesError::Unavailable {
                message: "Mock save failure".to_string(),
            });
        }
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BossId, ThemeId};

    #[test]
    fn test_starts_empty() {
        let backend = InMemoryPreferences::new();
        assert!(backend.load().unwrap().is_none());
        assert_eq!(backend.save_count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let backend = InMemoryPreferences::new();
        let handle = backend.clone();
        let snapshot = PreferencesSnapshot {
            favorites: vec![BossId(1)],
            theme: ThemeId::Mugman,
        };
        backend.save(&snapshot).unwrap();
        assert_eq!(handle.stored(), Some(snapshot));
        assert_eq!(handle.save_count(), 1);
    }

    #[test]
    fn test_injected_failures() {
        let backend = InMemoryPreferences::new();
        backend.fail_saves(true);
        backend.fail_loads(true);
        assert!(backend.save(&PreferencesSnapshot::default()).is_err());
        assert!(backend.load().is_err());
        assert!(backend.stored().is_none());
    }
}
