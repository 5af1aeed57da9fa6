//! Storage module for persisted state and configuration.

pub mod config;
pub mod key_value;
pub mod persisted;

pub use config::{AppConfig, ConfigError, StorageSettings, ThemePreference, UiSettings};
pub use key_value::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use persisted::Persisted;

/// Storage key for the login flag.
pub const KEY_IS_LOGGED_IN: &str = "moveasy_isLoggedIn";
/// Storage key for the favorite experience ids.
pub const KEY_FAVORITES: &str = "moveasy_favorites";
/// Storage key for the trip records.
pub const KEY_TRIPS: &str = "moveasy_trips";
