//! Core data models
//!
//! The transaction entity, its kind, and the lenient amount wrapper used by
//! stored ledgers.

pub mod amount;
pub mod transaction;

pub use amount::Amount;
pub use transaction::{Transaction, TransactionDraft, TransactionKind, TransactionRecord};
