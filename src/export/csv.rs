//! CSV export
//!
//! Layout: UTF-8 byte-order mark, the header `ID,Description,Amount,Type,Date`,
//! then one row per transaction in ledger order. Only the description is
//! quoted, with embedded double quotes doubled; the other columns never
//! contain commas by construction. Spreadsheet tools key their encoding
//! detection off the BOM. Rows are newline-joined with no trailing newline.

use crate::models::Transaction;

/// Exact CSV header row
pub const HEADER: &str = "ID,Description,Amount,Type,Date";

/// Encode the ledger as CSV text
pub fn export_csv(transactions: &[Transaction]) -> String {
    let mut rows = Vec::with_capacity(transactions.len() + 1);
    rows.push(HEADER.to_string());

    for txn in transactions {
        rows.push(format!(
            "{},\"{}\",{},{},{}",
            txn.id,
            txn.description.replace('"', "\"\""),
            txn.amount,
            txn.kind,
            txn.created_on()
        ));
    }

    format!("\u{feff}{}", rows.join("\n"))
}
