pub mod migrations;
pub mod models;
pub mod queries;
pub mod store;

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

pub use store::{AccountStore, MessageStore};

#[derive(Debug, Error)]
pub enum DbError {
    /// The accounts table already holds this username.
    #[error("username already taken")]
    UsernameTaken,

    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("DB lock poisoned: {0}")]
    LockPoisoned(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens a file database in WAL mode. The path `:memory:` gives the same
    /// private in-memory database as [`Database::open_in_memory`].
    pub fn open(path: &Path) -> Result<Self> {
        if path == Path::new(":memory:") {
            info!("Database opened in memory");
            return Self::open_in_memory();
        }

        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;
        let db = Self::init(conn)?;

        info!("Database opened at {}", path.display());
        Ok(db)
    }

    /// Private in-memory database; its contents are lost on drop.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrations::run(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DbError::LockPoisoned(e.to_string()))?;
        f(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_path_opens_in_memory() {
        let db = Database::open(Path::new(":memory:")).unwrap();

        let mode: String = db
            .with_conn(|conn| Ok(conn.query_row("PRAGMA journal_mode", [], |row| row.get(0))?))
            .unwrap();
        assert_eq!(mode, "memory");

        let account = db.create_account("alice", "pass1").unwrap();
        assert_eq!(db.get_account_by_id(account.id).unwrap().unwrap().username, "alice");
    }
}
