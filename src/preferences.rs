use crate::Level;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};
use std::{fmt, fs};

/// Describes why the [level](Level) preference could not be loaded or stored.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// The preference file could not be read or written.
    #[error("preference file could not be accessed: {0}")]
    Io(#[from] io::Error),
    /// The preference file does not hold a valid document.
    #[error("preference file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Remembers the last chosen [level](Level) between sessions.
pub trait PreferenceStore: Debug + Send {
    /// # Returns
    ///
    /// The stored [level](Level), or [None] when nothing was stored yet.
    ///
    /// # Errors
    ///
    /// When the underlying storage cannot be read.
    fn load_level(&self) -> Result<Option<Level>, PreferenceError>;

    /// Stores `level`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// When the underlying storage cannot be written.
    fn save_level(&mut self, level: Level) -> Result<(), PreferenceError>;
}

/// Keeps the [level](Level) in memory for one session.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    level: Option<Level>,
}

impl MemoryPreferences {
    /// An empty store.
    pub fn new() -> MemoryPreferences {
        MemoryPreferences::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_level(&self) -> Result<Option<Level>, PreferenceError> {
        Ok(self.level)
    }

    fn save_level(&mut self, level: Level) -> Result<(), PreferenceError> {
        self.level = Some(level);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct PreferenceDocument {
    level: Level,
}

/// Keeps the [level](Level) in a small JSON document such as `{ "level": "circle" }`.
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl fmt::Debug for JsonFilePreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFilePreferences")
            .field("path", &self.path.display())
            .finish()
    }
}

impl JsonFilePreferences {
    /// A store backed by the file at `path`. The file is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> JsonFilePreferences {
        JsonFilePreferences { path: path.into() }
    }

    /// The location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn load_level(&self) -> Result<Option<Level>, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let document: PreferenceDocument = serde_json::from_str(&contents)?;
        Ok(Some(document.level))
    }

    fn save_level(&mut self, level: Level) -> Result<(), PreferenceError> {
        let contents = serde_json::to_string(&PreferenceDocument { level })?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let mut preferences = MemoryPreferences::new();

        assert_eq!(None, preferences.load_level().expect("memory never fails"));
        preferences.save_level(Level::Star).expect("memory never fails");

        assert_eq!(Some(Level::Star), preferences.load_level().expect("memory never fails"));
    }

    #[test]
    fn json_missing_file_is_none() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let preferences = JsonFilePreferences::new(dir.path().join("level.json"));

        assert_eq!(None, preferences.load_level().expect("missing file is not an error"));
    }

    #[test]
    fn json_save_then_load() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let mut preferences = JsonFilePreferences::new(dir.path().join("level.json"));

        preferences.save_level(Level::Triangle).expect("save should succeed");

        let contents = fs::read_to_string(preferences.path()).expect("file was written");
        assert_eq!(r#"{"level":"triangle"}"#, contents);
        assert_eq!(Some(Level::Triangle), preferences.load_level().expect("load"));
    }

    #[test]
    fn json_malformed() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("level.json");
        fs::write(&path, "{ \"level\": \"hexagon\" }").expect("file was written");

        let error = JsonFilePreferences::new(path).load_level().unwrap_err();

        assert!(matches!(error, PreferenceError::Json(_)));
    }

    #[test]
    fn json_unwritable() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let mut preferences = JsonFilePreferences::new(dir.path().join("missing").join("level.json"));

        let error = preferences.save_level(Level::Circle).unwrap_err();

        assert!(matches!(error, PreferenceError::Io(_)));
    }
}
