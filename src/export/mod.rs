//! Export codec
//!
//! Converts the ordered ledger into its external formats. JSON and CSV are
//! produced here directly; the PDF path only builds a tabular projection
//! and hands it to a [`table::TableRenderer`]. Delivery (where the bytes
//! end up) is behind [`ExportSink`].

pub mod csv;
pub mod json;
pub mod table;

use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

use table::{TableRenderer, TransactionTable};

/// Fixed artifact names and MIME types, one pair per format
pub const JSON_FILE: &str = "transactions.json";
pub const JSON_MIME: &str = "application/json";
pub const CSV_FILE: &str = "transactions.csv";
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";
pub const PDF_FILE: &str = "transactions.pdf";
pub const PDF_MIME: &str = "application/pdf";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full-fidelity JSON dump
    Json,
    /// Spreadsheet-compatible CSV
    Csv,
    /// Tabular PDF document
    Pdf,
}

/// Delivery target for exported documents
pub trait ExportSink {
    /// Hand the finished document over; the codec does not care how
    /// delivery happens
    fn deliver(&self, bytes: &[u8], filename: &str, mime: &str) -> TallyResult<()>;
}

/// Writes exported documents into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&self, bytes: &[u8], filename: &str, _mime: &str) -> TallyResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            TallyError::Export(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(filename);
        fs::write(&path, bytes)
            .map_err(|e| TallyError::Export(format!("Failed to write {}: {}", path.display(), e)))
    }
}

/// Encode the ordered ledger in the chosen format and deliver it.
/// Returns the artifact filename that was written.
pub fn export_ledger(
    transactions: &[Transaction],
    format: ExportFormat,
    sink: &dyn ExportSink,
    renderer: &dyn TableRenderer,
) -> TallyResult<&'static str> {
    match format {
        ExportFormat::Json => {
            let body = json::export_json(transactions)?;
            sink.deliver(body.as_bytes(), JSON_FILE, JSON_MIME)?;
            Ok(JSON_FILE)
        }
        ExportFormat::Csv => {
            let body = csv::export_csv(transactions);
            sink.deliver(body.as_bytes(), CSV_FILE, CSV_MIME)?;
            Ok(CSV_FILE)
        }
        ExportFormat::Pdf => {
            let projection = TransactionTable::new(transactions);
            let bytes = renderer.render(&projection)?;
            sink.deliver(&bytes, PDF_FILE, PDF_MIME)?;
            Ok(PDF_FILE)
        }
    }
}
