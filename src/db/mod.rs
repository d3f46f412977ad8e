//! SQLite-backed persistent key→value maps.
//!
//! The application persists two opaque string maps: one for day-record
//! time values and one for waived workdays. Each map is a two-column
//! table; callers treat it as get/set/delete plus one full iteration at
//! load time to populate their in-memory cache.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::errors::AppResult;

#[derive(Debug, Clone, Copy)]
pub enum KvTable {
    DayRecords,
    WaivedWorkdays,
}

impl KvTable {
    fn name(&self) -> &'static str {
        match self {
            KvTable::DayRecords => "day_records",
            KvTable::WaivedWorkdays => "waived_workdays",
        }
    }
}

/// Open (or create) the store database and make sure both tables exist.
pub fn open(path: &Path) -> AppResult<Connection> {
    let conn = Connection::open(path)?;
    init_tables(&conn)?;
    Ok(conn)
}

pub fn init_tables(conn: &Connection) -> AppResult<()> {
    for table in [KvTable::DayRecords, KvTable::WaivedWorkdays] {
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                )",
                table.name()
            ),
            [],
        )?;
    }
    Ok(())
}

/// All `(key, value)` pairs of a table, in unspecified order.
pub fn entries(conn: &Connection, table: KvTable) -> AppResult<Vec<(String, String)>> {
    let mut stmt = conn.prepare(&format!("SELECT key, value FROM {}", table.name()))?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, table: KvTable, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row(
            &format!("SELECT value FROM {} WHERE key = ?1", table.name()),
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Unconditional overwrite.
pub fn set(conn: &Connection, table: KvTable, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        &format!(
            "INSERT INTO {} (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            table.name()
        ),
        params![key, value],
    )?;
    Ok(())
}

/// Delete a key; deleting an absent key is a no-op.
pub fn delete(conn: &Connection, table: KvTable, key: &str) -> AppResult<()> {
    conn.execute(
        &format!("DELETE FROM {} WHERE key = ?1", table.name()),
        params![key],
    )?;
    Ok(())
}
