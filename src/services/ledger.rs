//! Ledger store
//!
//! Owns the transaction collection and its persistence. Every mutating
//! operation writes a full snapshot back through the key-value adapter
//! before returning, so the stored ledger always matches memory.

use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::error::TallyResult;
use crate::models::{Transaction, TransactionDraft, TransactionRecord};
use crate::storage::KeyValueStore;

use super::ids::{IdGenerator, UuidGenerator};

/// Fixed storage key holding the serialized ledger
pub const STORAGE_KEY: &str = "finance-transactions";

/// Counts reported by a batch import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Rows accepted into the ledger
    pub imported: usize,
    /// Rows whose id was already present (in the ledger or earlier in the
    /// same batch)
    pub duplicates: usize,
    /// Rows that failed to parse or validate
    pub invalid: usize,
}

impl ImportOutcome {
    /// Everything that was not imported
    pub fn skipped(&self) -> usize {
        self.duplicates + self.invalid
    }
}

/// The transaction collection and its persistence
pub struct Ledger<S: KeyValueStore> {
    store: S,
    ids: Box<dyn IdGenerator>,
    transactions: Vec<Transaction>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load the ledger from storage with the production id source
    pub fn load(store: S) -> TallyResult<Self> {
        Self::load_with(store, Box::new(UuidGenerator))
    }

    /// Load the ledger from storage with a custom id source.
    ///
    /// An absent or unreadable stored value opens an empty ledger rather
    /// than failing; only adapter I/O errors propagate.
    pub fn load_with(store: S, ids: Box<dyn IdGenerator>) -> TallyResult<Self> {
        let transactions = match store.get(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(transactions) => transactions,
                Err(e) => {
                    warn!("stored ledger is unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            store,
            ids,
            transactions,
        })
    }

    /// Validate a draft, stamp it with a fresh id and the current time,
    /// store it, and persist. The draft is discarded on validation failure
    /// and nothing is written.
    pub fn add(&mut self, draft: TransactionDraft) -> TallyResult<Transaction> {
        let txn = Transaction::create(
            self.ids.new_id(),
            &draft.description,
            draft.amount,
            draft.kind,
            Utc::now(),
        )?;

        self.transactions.insert(0, txn.clone());
        self.save()?;
        debug!(id = %txn.id, "transaction added");
        Ok(txn)
    }

    /// Remove the entry with the given id, if present, then persist.
    /// Returns whether anything was removed; a missing id is not an error.
    pub fn remove(&mut self, id: &str) -> TallyResult<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() < before;

        self.save()?;
        if removed {
            debug!(id, "transaction removed");
        }
        Ok(removed)
    }

    /// All transactions, newest first. Entries sharing a timestamp keep
    /// their stored relative order.
    pub fn list(&self) -> Vec<Transaction> {
        let mut transactions = self.transactions.clone();
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        transactions
    }

    /// Merge a batch of candidate records.
    ///
    /// Each candidate is validated, then checked against the ids already in
    /// the ledger plus those accepted earlier in the batch; duplicates and
    /// invalid rows are skipped silently and only counted. The ledger is
    /// persisted exactly once, and only if at least one row was accepted.
    pub fn import_batch(&mut self, records: Vec<TransactionRecord>) -> TallyResult<ImportOutcome> {
        let mut outcome = ImportOutcome::default();
        let mut ids: HashSet<String> = self.transactions.iter().map(|t| t.id.clone()).collect();
        let mut accepted = Vec::new();

        for record in records {
            match record.into_transaction() {
                Ok(txn) => {
                    if ids.contains(&txn.id) {
                        outcome.duplicates += 1;
                        continue;
                    }
                    ids.insert(txn.id.clone());
                    accepted.push(txn);
                    outcome.imported += 1;
                }
                Err(e) => {
                    debug!("skipping invalid row: {}", e);
                    outcome.invalid += 1;
                }
            }
        }

        if outcome.imported > 0 {
            self.transactions.extend(accepted);
            self.save()?;
        }
        Ok(outcome)
    }

    /// The stored transactions in their persisted order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn save(&self) -> TallyResult<()> {
        let raw = serde_json::to_string(&self.transactions)?;
        self.store.set(STORAGE_KEY, &raw)
    }
}
