//! SQLite layout backend with in-memory cache.

use std::path::Path;
use std::sync::Mutex;

use dashmap::DashMap;
use rusqlite::{Connection, OptionalExtension};

use super::StoreBackend;
use crate::error::LayoutError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS layout (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// SQLite-backed layout storage with DashMap cache.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
    cache: DashMap<String, String>,
}

impl SqliteBackend {
    /// Open (or create) a layout database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::with_connection(Connection::open(path)?)
    }

    /// A private in-memory database, mostly useful for tests.
    pub fn in_memory() -> Result<Self, LayoutError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, LayoutError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
            cache: DashMap::new(),
        })
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T, LayoutError> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        Ok(f(&conn)?)
    }
}

impl StoreBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError> {
        // Check cache first
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let result = self.with_conn(|conn| {
            conn.query_row("SELECT value FROM layout WHERE key = ?", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
        })?;

        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }

        Ok(result)
    }

    fn set(&self, key: &str, value: String) -> Result<(), LayoutError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO layout (key, value) VALUES (?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, &value],
            )
        })?;

        self.cache.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), LayoutError> {
        self.with_conn(|conn| conn.execute("DELETE FROM layout WHERE key = ?", [key]))?;
        self.cache.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, LayoutError> {
        // substr() instead of LIKE so '%' and '_' in table keys match literally
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT key FROM layout WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key",
            )?;
            let rows = stmt.query_map([prefix], |row| row.get(0))?;
            rows.collect::<Result<Vec<_>, _>>()
        })
    }
}
