use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally_cli::config::TallyPaths;
use tally_cli::display;
use tally_cli::error::TallyError;
use tally_cli::export::{self, DirectorySink, ExportFormat};
use tally_cli::models::{TransactionDraft, TransactionKind};
use tally_cli::render::PdfRenderer;
use tally_cli::services::{import_csv, Ledger, Totals};
use tally_cli::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Personal transaction ledger",
    long_about = "tally keeps a personal ledger of income and expense \
                  transactions, shows running totals, and exports the \
                  ledger as JSON, CSV, or a tabular PDF."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction
    Add {
        /// What the money was for
        description: String,
        /// Positive amount, e.g. 12.50
        amount: f64,
        /// income or expense
        kind: TransactionKind,
    },

    /// Delete a transaction by id
    #[command(alias = "rm")]
    Remove {
        /// Transaction id (see `tally list`)
        id: String,
    },

    /// Show all transactions, newest first
    List,

    /// Show income, expense and balance totals
    Summary,

    /// Export the ledger
    Export {
        /// Output format
        format: ExportFormat,

        /// Directory to write the exported file into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Import transactions from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    paths.ensure_directories()?;
    let mut ledger = Ledger::load(FileStore::new(paths.data_dir()))?;

    match cli.command {
        Commands::Add {
            description,
            amount,
            kind,
        } => {
            let txn = ledger.add(TransactionDraft {
                description,
                amount,
                kind,
            })?;
            println!(
                "Added {} {} ({})",
                txn.description,
                display::format_currency(txn.amount.or_zero()),
                txn.id
            );
        }

        Commands::Remove { id } => {
            if ledger.remove(&id)? {
                println!("Removed {}", id);
            } else {
                println!("No transaction with id {}", id);
            }
        }

        Commands::List => {
            print!("{}", display::format_register(&ledger.list()));
        }

        Commands::Summary => {
            let totals = Totals::from_transactions(ledger.transactions());
            print!("{}", display::format_totals(&totals));
        }

        Commands::Export { format, output } => {
            let transactions = ledger.list();
            if transactions.is_empty() {
                println!("No transactions to export.");
                return Ok(());
            }

            let sink = DirectorySink::new(&output);
            let filename = export::export_ledger(&transactions, format, &sink, &PdfRenderer)?;
            println!(
                "Exported {} transactions to {}",
                transactions.len(),
                output.join(filename).display()
            );
        }

        Commands::Import { file } => {
            let text = fs::read_to_string(&file).map_err(|e| {
                TallyError::Import(format!("could not parse {}: {}", file.display(), e))
            })?;

            let outcome = import_csv(&mut ledger, &text)?;
            if outcome.imported == 0 {
                println!("No new transactions found.");
            } else {
                println!(
                    "Imported {} transactions ({} skipped).",
                    outcome.imported,
                    outcome.skipped()
                );
            }
        }
    }

    Ok(())
}
