//! The SQLite handle behind `SqliteStorage`.
//!
//! Both the RPC binary and the demo may hold the same file, so every handle
//! waits on a locked database instead of failing straight away.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::Connection;

use super::migrations;

/// How long a write waits for another handle to release the file.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// A migrated connection plus where it lives.
pub struct Database {
    conn: Connection,
    /// `None` for in-memory databases.
    path: Option<PathBuf>,
}

impl Database {
    /// Opens or creates the favorites database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let path = path.as_ref();
        Self::prepare(Connection::open(path)?, Some(path.to_path_buf()))
    }

    /// Opens a private database that disappears when dropped.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::prepare(Connection::open_in_memory()?, None)
    }

    fn prepare(conn: Connection, path: Option<PathBuf>) -> Result<Self, rusqlite::Error> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        migrations::run_all(&conn)?;
        Ok(Self { conn, path })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Highest migration applied to this database.
    pub fn schema_version(&self) -> i32 {
        migrations::get_schema_version(&self.conn)
    }
}
