//! Connection setup for the kv database.
//!
//! # Invariants
//! - File databases run in WAL mode with a 5s busy timeout.
//! - Failures before migration are reported as `DbError::Connect`.

use super::migrations::apply_migrations;
use super::{DbError, DbResult, MEMORY_TARGET};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the kv database file at `path`, creating it when missing, and
/// migrates it to the latest schema.
///
/// Logs one `db_open` start event and one ok/error event with duration.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_at(&path.display().to_string(), true, || Connection::open(path))
}

/// Opens a private in-memory kv database with the latest schema.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_at(MEMORY_TARGET, false, Connection::open_in_memory)
}

fn open_at(
    target: &str,
    wal: bool,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start target={target}");

    let result = connect()
        .and_then(|conn| configure(&conn, wal).map(|()| conn))
        .map_err(|source| DbError::Connect {
            target: target.to_string(),
            source,
        })
        .and_then(|mut conn| apply_migrations(&mut conn).map(|()| conn));

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok target={target} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error target={target} duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn configure(conn: &Connection, wal: bool) -> rusqlite::Result<()> {
    if wal {
        // journal_mode returns a row, so it cannot go through execute_batch.
        conn.query_row("PRAGMA journal_mode = WAL;", [], |_| Ok(()))?;
    }
    conn.busy_timeout(BUSY_TIMEOUT)
}
