//! Preference persistence.

pub mod prefs;

pub use prefs::{FilePrefsStore, MemoryPrefsStore, Preferences, PrefsError, PrefsStore};
