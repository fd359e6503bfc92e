//! TOML-based preference persistence.
//!
//! The app persists exactly three things across restarts: which student the
//! device belongs to, whether the first-run selection has happened yet, and
//! the log level.  They live in the platform-appropriate config file:
//!
//! - Windows:  `%APPDATA%\CleaningRota\prefs.toml`
//! - Linux:    `~/.config/cleaningrota/prefs.toml`
//! - macOS:    `~/Library/Application Support/CleaningRota/prefs.toml`
//!
//! Fields use `#[serde(default = …)]` so a missing file, an empty file, and
//! a file written by an older build all load cleanly — there is no schema
//! versioning or migration, by design.

use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for preference file operations.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse preferences TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The preferences could not be serialized to TOML.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The persisted preference set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// The selected student, set on first run or when switching students.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    /// `true` until the first-run selection completes.
    #[serde(default = "default_true")]
    pub is_first_launch: bool,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            student_name: None,
            is_first_launch: default_true(),
            log_level: default_log_level(),
        }
    }
}

// ── Store abstraction ─────────────────────────────────────────────────────────

/// Read/write access to the persisted preferences.
///
/// The trait exists so the session layer can be tested against an in-memory
/// store; production code uses [`FilePrefsStore`].
pub trait PrefsStore {
    fn load(&self) -> Result<Preferences, PrefsError>;
    fn save(&self, prefs: &Preferences) -> Result<(), PrefsError>;
}

// A shared reference to a store is itself a store, so a session can borrow
// a store that outlives it (tests simulate app restarts this way).
impl<T: PrefsStore + ?Sized> PrefsStore for &T {
    fn load(&self) -> Result<Preferences, PrefsError> {
        (**self).load()
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        (**self).save(prefs)
    }
}

/// File-backed store at a fixed path.
pub struct FilePrefsStore {
    path: PathBuf,
}

impl FilePrefsStore {
    /// A store at an explicit path (used by tests and tooling).
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// A store at the platform-appropriate default location.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::NoPlatformConfigDir`] when the platform config
    /// base directory cannot be determined from the environment.
    pub fn at_default_location() -> Result<Self, PrefsError> {
        let dir = platform_config_dir().ok_or(PrefsError::NoPlatformConfigDir)?;
        Ok(Self { path: dir.join("prefs.toml") })
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PrefsStore for FilePrefsStore {
    /// Loads preferences, returning `Preferences::default()` if the file
    /// does not yet exist (the first-run case).
    fn load(&self) -> Result<Preferences, PrefsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let prefs: Preferences = toml::from_str(&content)?;
                Ok(prefs)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Preferences::default())
            }
            Err(e) => Err(PrefsError::Io { path: self.path.clone(), source: e }),
        }
    }

    /// Persists `prefs`, creating the config directory if needed.
    fn save(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| PrefsError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(prefs)?;
        std::fs::write(&self.path, content).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// In-memory store for tests; never touches the file system.
#[derive(Default)]
pub struct MemoryPrefsStore {
    prefs: RefCell<Preferences>,
}

impl MemoryPrefsStore {
    pub fn new(prefs: Preferences) -> Self {
        Self { prefs: RefCell::new(prefs) }
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load(&self) -> Result<Preferences, PrefsError> {
        Ok(self.prefs.borrow().clone())
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        *self.prefs.borrow_mut() = prefs.clone();
        Ok(())
    }
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("CleaningRota"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("cleaningrota"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("CleaningRota")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> FilePrefsStore {
        let dir = std::env::temp_dir().join(format!("rota_prefs_{tag}_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        FilePrefsStore::new(dir.join("prefs.toml"))
    }

    #[test]
    fn test_defaults_mark_first_launch_with_no_student() {
        let prefs = Preferences::default();
        assert!(prefs.is_first_launch);
        assert_eq!(prefs.student_name, None);
        assert_eq!(prefs.log_level, "info");
    }

    #[test]
    fn test_load_returns_defaults_when_file_absent() {
        let store = FilePrefsStore::new(PathBuf::from(
            "/nonexistent/path/that/cannot/exist/prefs.toml",
        ));
        let prefs = store.load().expect("absent file loads as defaults");
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = temp_store("round_trip");
        let prefs = Preferences {
            student_name: Some("Janna".to_string()),
            is_first_launch: false,
            log_level: "debug".to_string(),
        };

        store.save(&prefs).expect("save");
        let loaded = store.load().expect("load");

        assert_eq!(loaded, prefs);
        std::fs::remove_file(store.path()).ok();
    }

    #[test]
    fn test_none_student_name_is_omitted_from_toml() {
        let toml_str = toml::to_string_pretty(&Preferences::default()).expect("serialize");
        assert!(
            !toml_str.contains("student_name"),
            "None student must be omitted, got:\n{toml_str}"
        );
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let prefs: Preferences = toml::from_str("").expect("empty TOML");
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_deserialize_partial_toml_keeps_remaining_defaults() {
        let prefs: Preferences =
            toml::from_str(r#"student_name = "Wesley""#).expect("partial TOML");
        assert_eq!(prefs.student_name.as_deref(), Some("Wesley"));
        assert!(prefs.is_first_launch);
        assert_eq!(prefs.log_level, "info");
    }

    #[test]
    fn test_deserialize_invalid_toml_is_a_parse_error() {
        let result: Result<Preferences, toml::de::Error> = toml::from_str("[[[ not toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_store_round_trips_without_touching_disk() {
        let store = MemoryPrefsStore::default();
        let mut prefs = store.load().expect("load defaults");
        prefs.student_name = Some("Cyrus".to_string());
        prefs.is_first_launch = false;
        store.save(&prefs).expect("save");
        assert_eq!(store.load().expect("reload"), prefs);
    }
}
