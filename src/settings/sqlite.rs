//! SQLite Settings Store
//!
//! Keeps the arrangement settings in a single key-value table.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::traits::SettingsStore;
use crate::domain::MenuResult;

pub struct SqliteSettingsStore {
    conn: Connection,
}

impl SqliteSettingsStore {
    /// Open (or create) the settings database at `db_path`
    pub fn open(db_path: &Path) -> MenuResult<Self> {
        let conn = Connection::open(db_path)?;
        run_migrations(&conn)?;
        log::debug!("Settings database opened at {}", db_path.display());
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> MenuResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Last write time of `key` as Unix milliseconds
    pub fn updated_at(&self, key: &str) -> MenuResult<Option<i64>> {
        let value = self
            .conn
            .query_row(
                "SELECT updated_at FROM settings WHERE key = ?",
                params![key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(value)
    }
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> MenuResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )?;
    Ok(())
}

impl SettingsStore for SqliteSettingsStore {
    fn load(&self, key: &str) -> MenuResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: Option<&str>) -> MenuResult<()> {
        match value {
            Some(value) => {
                self.conn.execute(
                    "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?, ?, ?)",
                    params![key, value, chrono::Utc::now().timestamp_millis()],
                )?;
            }
            None => {
                self.conn
                    .execute("DELETE FROM settings WHERE key = ?", params![key])?;
            }
        }
        Ok(())
    }
}
