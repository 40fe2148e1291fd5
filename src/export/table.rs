//! Tabular projection
//!
//! Flattens the ordered ledger into the title, header and row data a
//! document renderer needs. Page layout and styling live behind
//! [`TableRenderer`]; the codec's contract ends here.

use crate::display::format_currency;
use crate::error::TallyResult;
use crate::models::Transaction;

/// Title printed above the exported table
pub const TITLE: &str = "Transaction History";

/// Column headers, in order
pub const COLUMNS: [&str; 4] = ["Date", "Description", "Type", "Amount"];

/// Row/column projection of the ledger for document rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionTable {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<[String; 4]>,
}

impl TransactionTable {
    /// Project the ledger into table rows. Amounts carry a `+`/`-` prefix
    /// per kind and currency formatting.
    pub fn new(transactions: &[Transaction]) -> Self {
        let rows = transactions
            .iter()
            .map(|txn| {
                [
                    txn.created_on(),
                    txn.description.clone(),
                    txn.kind.to_string(),
                    format!(
                        "{}{}",
                        txn.kind.sign(),
                        format_currency(txn.amount.or_zero())
                    ),
                ]
            })
            .collect();

        Self {
            title: TITLE.to_string(),
            header: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

/// Renders a [`TransactionTable`] into a downloadable document
pub trait TableRenderer {
    fn render(&self, table: &TransactionTable) -> TallyResult<Vec<u8>>;
}
