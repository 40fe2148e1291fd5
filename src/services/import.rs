//! CSV import
//!
//! Reads back the CSV layout written by the export codec: a header line,
//! then `id,description,amount,type,date` rows. The parser is deliberately
//! naive: lines are split on `,` with no quote awareness, so a description
//! containing a comma shifts the remaining columns and the row fails to
//! parse. That limitation is part of the documented behavior and is not
//! corrected here.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use thiserror::Error;
use tracing::debug;

use crate::error::TallyResult;
use crate::models::TransactionRecord;
use crate::storage::KeyValueStore;

use super::ledger::{ImportOutcome, Ledger};

/// Why a single row could not become a candidate record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected 5 columns, found {0}")]
    MissingColumns(usize),
    #[error("unreadable amount: {0}")]
    Amount(String),
    #[error("unknown transaction type: {0}")]
    Kind(String),
    #[error("unreadable date: {0}")]
    Date(String),
}

/// Parse raw CSV text and merge the resulting candidates into the ledger.
///
/// Structurally broken rows count as invalid in the outcome alongside the
/// rows the ledger rejects during validation; nothing is persisted unless
/// at least one row imports.
pub fn import_csv<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    text: &str,
) -> TallyResult<ImportOutcome> {
    let mut invalid = 0;
    let mut candidates = Vec::new();

    for row in parse_rows(text) {
        match row {
            Ok(record) => candidates.push(record),
            Err(e) => {
                debug!("skipping unparsable row: {}", e);
                invalid += 1;
            }
        }
    }

    let mut outcome = ledger.import_batch(candidates)?;
    outcome.invalid += invalid;
    Ok(outcome)
}

/// Split CSV text into candidate rows. The first line is always treated as
/// the header and discarded; blank lines are skipped.
pub fn parse_rows(text: &str) -> Vec<Result<TransactionRecord, RowError>> {
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect()
}

/// Columns by position: id, description, amount, type, date. Double quotes
/// are stripped from the description wholesale rather than unescaped.
fn parse_row(line: &str) -> Result<TransactionRecord, RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 5 {
        return Err(RowError::MissingColumns(fields.len()));
    }

    let id = fields[0].trim().to_string();
    let description = fields[1].replace('"', "");
    let amount: f64 = fields[2]
        .trim()
        .parse()
        .map_err(|_| RowError::Amount(fields[2].to_string()))?;
    let kind = fields[3]
        .trim()
        .parse()
        .map_err(|_| RowError::Kind(fields[3].to_string()))?;
    let created_at = parse_date(fields[4])?;

    Ok(TransactionRecord {
        id,
        description,
        amount,
        kind,
        created_at,
    })
}

/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` day, which is
/// read as midnight UTC.
fn parse_date(value: &str) -> Result<DateTime<Utc>, RowError> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|day| Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)))
        .map_err(|_| RowError::Date(value.to_string()))
}
