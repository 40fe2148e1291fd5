//! tally - a personal transaction ledger
//!
//! Core library behind the `tally` binary. The ledger holds income and
//! expense records, persists them through a key-value storage adapter, and
//! exports to JSON, CSV, and a tabular PDF.
//!
//! # Architecture
//!
//! - `models`: the transaction entity and its validation
//! - `storage`: key-value persistence (file-backed, atomic writes)
//! - `services`: ledger store, totals, id generation, CSV import
//! - `export`: JSON/CSV codecs, the table projection, delivery sinks
//! - `render`: document renderers behind the table projection
//! - `display`: terminal and currency formatting
//! - `config`: path resolution
//! - `error`: error types

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
