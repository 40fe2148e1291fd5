//! JSON export
//!
//! A full-fidelity dump of the ordered ledger: exact field set, exact
//! values, pretty printed. There is deliberately no JSON import path; the
//! ledger only ever reads CSV back in.

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// Serialize the ledger as pretty-printed JSON
pub fn export_json(transactions: &[Transaction]) -> TallyResult<String> {
    serde_json::to_string_pretty(transactions)
        .map_err(|e| TallyError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::create(
                "a".into(),
                "Salary",
                1000.0,
                TransactionKind::Income,
                Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
            )
            .unwrap(),
            Transaction::create(
                "b".into(),
                "Rent",
                800.0,
                TransactionKind::Expense,
                Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap(),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let transactions = sample();
        let json = export_json(&transactions).unwrap();
        let back: Vec<Transaction> = serde_json::from_str(&json).unwrap();
        assert_eq!(transactions, back);
    }

    #[test]
    fn test_exact_field_names() {
        let json = export_json(&sample()).unwrap();
        assert!(json.contains("\"id\""));
        assert!(json.contains("\"description\""));
        assert!(json.contains("\"amount\""));
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"createdAt\""));
        // Pretty printed
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_empty_ledger() {
        assert_eq!(export_json(&[]).unwrap(), "[]");
    }
}
