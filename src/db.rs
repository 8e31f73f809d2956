// ==========================================
// Sorare MLB Optimizer - SQLite connection setup
// ==========================================
// Single place for Connection::open so every module gets the same
// PRAGMA behavior (foreign keys, busy timeout).
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the shared per-connection PRAGMAs. foreign_keys and
/// busy_timeout are per-connection settings in SQLite.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the shared configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}
