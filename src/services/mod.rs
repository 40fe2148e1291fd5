//! Business logic layer
//!
//! The ledger store, its totals, id generation, and CSV import on top of
//! the storage layer.

pub mod aggregate;
pub mod ids;
pub mod import;
pub mod ledger;

pub use aggregate::Totals;
pub use ids::{IdGenerator, SequenceGenerator, UuidGenerator};
pub use import::import_csv;
pub use ledger::{ImportOutcome, Ledger, STORAGE_KEY};
