use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::entities::record::{Payout, Referral};
use crate::infra::sqlite::schema::open_connection;

pub const PAYOUT_TABLE: &str = "payout";
pub const WITHDRAWAL_TABLE: &str = "withdrawal_request";

pub fn load_payouts(db_path: &Path) -> Result<Vec<Payout>> {
    load_payout_rows(db_path, PAYOUT_TABLE)
}

pub fn load_withdrawals(db_path: &Path) -> Result<Vec<Payout>> {
    load_payout_rows(db_path, WITHDRAWAL_TABLE)
}

fn load_payout_rows(db_path: &Path, table: &str) -> Result<Vec<Payout>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT id, date, amount, method, status, reference
             FROM {table}
             ORDER BY row_idx ASC"
        ))
        .with_context(|| format!("failed to prepare {table} query"))?;

    let payouts = stmt
        .query_map([], |row| {
            Ok(Payout {
                id: row.get(0)?,
                date: row.get(1)?,
                amount: row.get(2)?,
                method: row.get(3)?,
                status: row.get(4)?,
                reference: row.get(5)?,
            })
        })
        .with_context(|| format!("failed to query {table}"))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("failed to collect {table} rows"))?;

    Ok(payouts)
}

pub fn load_referrals(db_path: &Path) -> Result<Vec<Referral>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT id, name, email, status, join_date, earnings
             FROM referral
             ORDER BY row_idx ASC",
        )
        .context("failed to prepare referral query")?;

    let referrals = stmt
        .query_map([], |row| {
            Ok(Referral {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                status: row.get(3)?,
                join_date: row.get(4)?,
                earnings: row.get(5)?,
            })
        })
        .context("failed to query referrals")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect referrals")?;

    Ok(referrals)
}

/// Replaces the stored payouts. Row order is preserved for later loads.
pub fn replace_payouts(db_path: &Path, payouts: &[Payout]) -> Result<usize> {
    replace_payout_rows(db_path, PAYOUT_TABLE, payouts)
}

pub fn replace_withdrawals(db_path: &Path, requests: &[Payout]) -> Result<usize> {
    replace_payout_rows(db_path, WITHDRAWAL_TABLE, requests)
}

fn replace_payout_rows(db_path: &Path, table: &str, payouts: &[Payout]) -> Result<usize> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .with_context(|| format!("failed to start {table} transaction"))?;

    tx.execute(&format!("DELETE FROM {table}"), [])
        .with_context(|| format!("failed to clear existing {table} rows"))?;

    let mut insert_stmt = tx
        .prepare(&format!(
            "INSERT INTO {table}(row_idx, id, date, amount, method, status, reference)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
        ))
        .with_context(|| format!("failed to prepare {table} insert"))?;

    for (row_idx, payout) in payouts.iter().enumerate() {
        insert_stmt
            .execute(params![
                row_idx as i64,
                payout.id,
                payout.date,
                payout.amount,
                payout.method,
                payout.status,
                payout.reference,
            ])
            .with_context(|| format!("failed to insert {table} row {}", payout.id))?;
    }

    drop(insert_stmt);
    tx.commit()
        .with_context(|| format!("failed to commit {table} import"))?;
    Ok(payouts.len())
}

pub fn replace_referrals(db_path: &Path, referrals: &[Referral]) -> Result<usize> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start referral transaction")?;

    tx.execute("DELETE FROM referral", [])
        .context("failed to clear existing referrals")?;

    let mut insert_stmt = tx
        .prepare(
            "INSERT INTO referral(row_idx, id, name, email, status, join_date, earnings)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .context("failed to prepare referral insert")?;

    for (row_idx, referral) in referrals.iter().enumerate() {
        insert_stmt
            .execute(params![
                row_idx as i64,
                referral.id,
                referral.name,
                referral.email,
                referral.status,
                referral.join_date,
                referral.earnings,
            ])
            .with_context(|| format!("failed to insert referral {}", referral.id))?;
    }

    drop(insert_stmt);
    tx.commit().context("failed to commit referral import")?;
    Ok(referrals.len())
}

pub fn load_preferences(db_path: &Path) -> Result<BTreeMap<String, String>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare("SELECT key, value FROM preference")
        .context("failed to prepare preference query")?;

    let rows = stmt
        .query_map([], |row| {
            let key: String = row.get(0)?;
            let value: String = row.get(1)?;
            Ok((key, value))
        })
        .context("failed to query preferences")?;

    let mut entries = BTreeMap::new();
    for row in rows {
        let (key, value) = row.context("failed to read preference row")?;
        entries.insert(key, value);
    }

    Ok(entries)
}

pub fn save_preferences(db_path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start preference transaction")?;

    let mut upsert_stmt = tx
        .prepare(
            "INSERT INTO preference(key, value, updated_at)
             VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
        )
        .context("failed to prepare preference upsert")?;

    for (key, value) in entries {
        upsert_stmt
            .execute(params![key, value])
            .with_context(|| format!("failed to store preference {key}"))?;
    }

    drop(upsert_stmt);
    tx.commit().context("failed to commit preferences")?;
    Ok(())
}
