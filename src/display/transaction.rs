//! Transaction display formatting
//!
//! Register and summary views for the terminal.

use crate::models::Transaction;
use crate::services::Totals;

use super::currency::format_currency;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let signed = format!(
        "{}{}",
        txn.kind.sign(),
        format_currency(txn.amount.or_zero())
    );

    format!(
        "{:36}  {}  {:7}  {:24}  {:>12}",
        txn.id,
        txn.created_on(),
        txn.kind.to_string(),
        truncate(&txn.description, 24),
        signed
    )
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions yet. Add one to get started!\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:36}  {:10}  {:7}  {:24}  {:>12}\n",
        "ID", "Date", "Type", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(96));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format ledger totals for the summary view
pub fn format_totals(totals: &Totals) -> String {
    format!(
        "Income:   {}\nExpenses: {}\nBalance:  {}\n",
        format_currency(totals.income),
        format_currency(totals.expenses),
        format_currency(totals.balance)
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max - 1).collect();
        format!("{}…", kept)
    }
}
