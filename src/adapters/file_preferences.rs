//! File-based preferences backend.
//!
//! Stores the snapshot as pretty-printed JSON in
//! `<data dir>/preferences.json`, `~/.bossdex/preferences.json` by default.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::preferences::{PreferencesError, PreferencesSnapshot};
use crate::traits::PreferencesBackend;

/// The preferences file name inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Preferences stored in a JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Backend for `preferences.json` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PREFERENCES_FILE),
        }
    }

    /// Backend for an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the preferences file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferencesBackend for FilePreferences {
    fn load(&self) -> Result<Option<PreferencesSnapshot>, PreferencesError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PreferencesError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map(Some)
            .map_err(|source| PreferencesError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&self, snapshot: &PreferencesSnapshot) -> Result<(), PreferencesError> {
        write_replacing(&self.path, |writer| {
            serde_json::to_writer_pretty(&mut *writer, snapshot).map_err(std::io::Error::other)
        })
        .map_err(|source| PreferencesError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Write `path` through a sibling temp file renamed over it on success.
///
/// A failed write leaves the previous file untouched.
fn write_replacing<F>(path: &Path, write: F) -> std::io::Result<()>
where
    F: FnOnce(&mut BufWriter<&File>) -> std::io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BossId, ThemeId};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_none() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FilePreferences::in_dir(temp_dir.path());
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_directory_and_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FilePreferences::in_dir(&temp_dir.path().join(".bossdex"));
        let snapshot = PreferencesSnapshot {
            favorites: vec![BossId(1), BossId(4)],
            theme: ThemeId::Cuphead,
        };

        backend.save(&snapshot).unwrap();

        assert!(backend.path().exists());
        assert_eq!(backend.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "{ not json").unwrap();

        let backend = FilePreferences::with_path(&path);
        assert!(matches!(
            backend.load(),
            Err(PreferencesError::Malformed { .. })
        ));
    }

    #[test]
    fn test_save_into_file_as_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let backend = FilePreferences::with_path(blocker.join(PREFERENCES_FILE));
        assert!(matches!(
            backend.save(&PreferencesSnapshot::default()),
            Err(PreferencesError::Write { .. })
        ));
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FilePreferences::in_dir(temp_dir.path());
        let saved = PreferencesSnapshot {
            favorites: vec![BossId(2)],
            theme: ThemeId::Mugman,
        };
        backend.save(&saved).unwrap();

        let result = write_replacing(backend.path(), |writer| {
            writer.write_all(b"{\"favor")?;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        });

        assert!(result.is_err());
        assert_eq!(backend.load().unwrap(), Some(saved));
        let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_describe_is_path() {
        let backend = FilePreferences::with_path("/tmp/x/preferences.json");
        assert_eq!(backend.describe(), "/tmp/x/preferences.json");
    }
}
