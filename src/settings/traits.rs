//! Settings Layer - Core Traits
//!
//! Defines the abstract interface for persisted arrangement settings.
//! Implementations can use SQLite, in-memory, etc.

use crate::domain::MenuResult;

/// Durable string key-value storage
pub trait SettingsStore {
    /// Read a value; `None` when the key was never written or was cleared
    fn load(&self, key: &str) -> MenuResult<Option<String>>;

    /// Write a value; `None` clears the key
    fn save(&mut self, key: &str, value: Option<&str>) -> MenuResult<()>;
}
