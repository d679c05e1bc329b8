//! In-memory settings store, for tests and hosts without persistence.

use std::collections::HashMap;

use super::traits::SettingsStore;
use crate::domain::MenuResult;

#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self, key: &str) -> MenuResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: Option<&str>) -> MenuResult<()> {
        match value {
            Some(value) => {
                self.values.insert(key.to_string(), value.to_string());
            }
            None => {
                self.values.remove(key);
            }
        }
        Ok(())
    }
}
