use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS payout (
            row_idx     INTEGER PRIMARY KEY,
            id          INTEGER NOT NULL,
            date        TEXT NOT NULL,
            amount      TEXT NOT NULL,
            method      TEXT NOT NULL,
            status      TEXT NOT NULL,
            reference   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS withdrawal_request (
            row_idx     INTEGER PRIMARY KEY,
            id          INTEGER NOT NULL,
            date        TEXT NOT NULL,
            amount      TEXT NOT NULL,
            method      TEXT NOT NULL,
            status      TEXT NOT NULL,
            reference   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS referral (
            row_idx     INTEGER PRIMARY KEY,
            id          INTEGER NOT NULL,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            status      TEXT NOT NULL,
            join_date   TEXT NOT NULL,
            earnings    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS preference (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
