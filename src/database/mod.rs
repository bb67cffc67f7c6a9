//! SQLite database layer.
//!
//! Provides connection management and schema migrations for the
//! key-value table that backs persisted favorites.
//!
//! # Usage
//!
//! ```no_run
//! use mapfav::database::Database;
//!
//! let db = Database::open("mapfav.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! assert!(db.path().is_none());
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
