//! Ledger totals

use crate::models::{Transaction, TransactionKind};

/// Income, expense and balance totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl Totals {
    /// Sum a transaction sequence.
    ///
    /// Amounts that cannot be read as numbers count as zero; the stored
    /// records themselves are left untouched.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut income = 0.0;
        let mut expenses = 0.0;

        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income += txn.amount.or_zero(),
                TransactionKind::Expense => expenses += txn.amount.or_zero(),
            }
        }

        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}
