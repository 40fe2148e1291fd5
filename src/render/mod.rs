//! Document renderers
//!
//! Implementations of the export table's renderer contract. The ledger
//! codec only produces row/column data; everything about page layout and
//! styling lives here and is cosmetic.

pub mod pdf;

pub use pdf::PdfRenderer;
