//! Transaction model
//!
//! A transaction is immutable once created: the ledger supports adding and
//! removing entries, never editing them. Serde field names (`type`,
//! `createdAt`) are the external compatibility contract for stored ledgers
//! and JSON exports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TallyError, TallyResult};

use super::amount::Amount;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Sign prefix used wherever a signed amount is displayed
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TallyError::Validation(format!(
                "transaction type must be 'income' or 'expense', got '{}'",
                other
            ))),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier
    pub id: String,

    /// What the money was for
    pub description: String,

    /// Currency magnitude; the sign is implied by `kind`
    pub amount: Amount,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Creation timestamp, stored as an ISO-8601 string
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Validate a candidate and build the transaction.
    ///
    /// This is the only constructor; a rejected candidate is discarded
    /// whole, never partially stored. Rules: the description must be
    /// non-empty after trimming, and the amount must be a finite number
    /// greater than zero.
    pub fn create(
        id: String,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        created_at: DateTime<Utc>,
    ) -> TallyResult<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TallyError::Validation(
                "description must not be empty".into(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TallyError::Validation(format!(
                "amount must be a positive number, got {}",
                amount
            )));
        }

        Ok(Self {
            id,
            description: description.to_string(),
            amount: Amount::Number(amount),
            kind,
            created_at,
        })
    }

    /// Calendar day of creation (`YYYY-MM-DD`), used by the CSV codec and
    /// the table projection
    pub fn created_on(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// Input for the interactive add path; the ledger assigns the id and
/// timestamp.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

/// A fully-specified candidate, as parsed from an imported row. Carries its
/// own id and timestamp, unlike [`TransactionDraft`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Validate and convert into a storable transaction
    pub fn into_transaction(self) -> TallyResult<Transaction> {
        Transaction::create(
            self.id,
            &self.description,
            self.amount,
            self.kind,
            self.created_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_create_valid() {
        let txn = Transaction::create(
            "txn-1".into(),
            "  Groceries  ",
            42.5,
            TransactionKind::Expense,
            test_time(),
        )
        .unwrap();

        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.amount, Amount::Number(42.5));
        assert_eq!(txn.created_on(), "2024-01-15");
    }

    #[test]
    fn test_create_rejects_blank_description() {
        let result = Transaction::create(
            "txn-1".into(),
            "   ",
            10.0,
            TransactionKind::Income,
            test_time(),
        );
        assert!(matches!(result, Err(TallyError::Validation(_))));
    }

    #[test]
    fn test_create_rejects_non_positive_amount() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = Transaction::create(
                "txn-1".into(),
                "Rent",
                bad,
                TransactionKind::Expense,
                test_time(),
            );
            assert!(result.is_err(), "amount {} should be rejected", bad);
        }
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            "income".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            "expense".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert!("Income".parse::<TransactionKind>().is_err());
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let txn = Transaction::create(
            "abc".into(),
            "Salary",
            1000.0,
            TransactionKind::Income,
            test_time(),
        )
        .unwrap();

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["description"], "Salary");
        assert_eq!(json["amount"], 1000.0);
        assert_eq!(json["type"], "income");
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_round_trip() {
        let txn = Transaction::create(
            "abc".into(),
            "Salary",
            1000.0,
            TransactionKind::Income,
            test_time(),
        )
        .unwrap();

        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_unknown_kind_fails_to_deserialize() {
        let json = r#"{"id":"x","description":"d","amount":1,"type":"transfer","createdAt":"2024-01-15T10:30:00Z"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
