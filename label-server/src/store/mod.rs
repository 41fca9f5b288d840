//! redb-based counter & history store
//!
//! # Table
//!
//! One string-valued KV table, `label_state`:
//!
//! | Key | Value |
//! |-----|-------|
//! | `last_barcode` | decimal string of the counter |
//! | `product_history` | JSON-encoded array of product records, newest first |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so counter and history survive power loss in a
//! consistent state. Counter and history are always written in the same
//! transaction by `record_product`, so the sequential-barcode invariant holds
//! across restarts.
//!
//! # Rehydration
//!
//! Missing or unparseable persisted values are silently replaced with
//! defaults at open time (a warning is logged). The store never surfaces a
//! load error for corrupt state.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use thiserror::Error;

use shared::models::product::{DEFAULT_COUNTER, MAX_PRINT_QUANTITY, ProductDraft, ProductRecord};
use shared::util::{local_timestamp, snowflake_id};
use shared::{AppError, AppResult, ErrorCode};

/// Single state table: key = state key, value = string payload
const STATE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("label_state");

const LAST_BARCODE_KEY: &str = "last_barcode";
const PRODUCT_HISTORY_KEY: &str = "product_history";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::database(err.to_string())
    }
}

struct StoreInner {
    counter: u64,
    /// Newest first, unbounded (display truncation happens at the API)
    history: Vec<ProductRecord>,
}

/// Counter & history store backed by redb
///
/// All mutations persist before the in-memory copy changes, so a failed
/// write leaves both the database and the running state untouched.
#[derive(Clone)]
pub struct LabelStore {
    db: Arc<Database>,
    inner: Arc<RwLock<StoreInner>>,
    max_print_quantity: u32,
}

impl LabelStore {
    /// Open or create the database at the given path and rehydrate state
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::with_database(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::with_database(db)
    }

    fn with_database(db: Database) -> StoreResult<Self> {
        // Make sure the table exists before any read
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        let inner = Self::rehydrate(&db)?;

        Ok(Self {
            db: Arc::new(db),
            inner: Arc::new(RwLock::new(inner)),
            max_print_quantity: MAX_PRINT_QUANTITY,
        })
    }

    /// Override the per-job copy cap (configuration)
    pub fn with_max_print_quantity(mut self, max: u32) -> Self {
        self.max_print_quantity = max.max(1);
        self
    }

    /// Load persisted state, falling back to defaults on anything unparseable
    fn rehydrate(db: &Database) -> StoreResult<StoreInner> {
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        let counter = match table.get(LAST_BARCODE_KEY)? {
            Some(guard) => match guard.value().parse::<u64>() {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(
                        raw = guard.value(),
                        "Persisted counter unparseable, using default"
                    );
                    DEFAULT_COUNTER
                }
            },
            None => DEFAULT_COUNTER,
        };

        let history = match table.get(PRODUCT_HISTORY_KEY)? {
            Some(guard) => match serde_json::from_str::<Vec<ProductRecord>>(guard.value()) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, "Persisted history unparseable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(StoreInner { counter, history })
    }

    // ========== Counter Operations ==========

    /// The counter value the next product will be assigned
    pub fn counter(&self) -> u64 {
        self.inner.read().counter
    }

    /// Set the counter directly
    ///
    /// `None` (absent or unparseable input) silently resets to the default
    /// constant. Persists immediately; returns the effective value.
    pub fn set_counter(&self, value: Option<u64>) -> StoreResult<u64> {
        let value = value.unwrap_or(DEFAULT_COUNTER);

        let mut inner = self.inner.write();
        self.persist(Some(value), None)?;
        inner.counter = value;
        Ok(value)
    }

    /// Reset the counter to the default constant
    pub fn reset_counter(&self) -> StoreResult<u64> {
        self.set_counter(Some(DEFAULT_COUNTER))
    }

    // ========== History Operations ==========

    /// Most recent records, newest first, truncated to `limit` when given
    pub fn history(&self, limit: Option<usize>) -> Vec<ProductRecord> {
        let inner = self.inner.read();
        match limit {
            Some(n) => inner.history.iter().take(n).cloned().collect(),
            None => inner.history.clone(),
        }
    }

    /// Total number of retained records
    pub fn history_len(&self) -> usize {
        self.inner.read().history.len()
    }

    /// Look up a record by its display id
    pub fn find(&self, id: i64) -> Option<ProductRecord> {
        self.inner.read().history.iter().find(|r| r.id == id).cloned()
    }

    /// Empty the history and remove its persisted entry
    pub fn clear_history(&self) -> StoreResult<()> {
        let mut inner = self.inner.write();

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.remove(PRODUCT_HISTORY_KEY)?;
        }
        write_txn.commit()?;

        inner.history.clear();
        Ok(())
    }

    // ========== Generation ==========

    /// Validate the draft, assign the current counter value as barcode,
    /// prepend to history and increment the counter by exactly 1.
    ///
    /// Counter and history are persisted in a single transaction; validation
    /// failure leaves both untouched.
    pub fn record_product(&self, draft: ProductDraft) -> AppResult<ProductRecord> {
        let company_name = non_empty(draft.company_name);
        let product_name = non_empty(draft.product_name);

        let (Some(company_name), Some(product_name), Some(amount)) =
            (company_name, product_name, draft.amount)
        else {
            return Err(AppError::required_field(
                "company name, product name and amount are required",
            ));
        };

        if amount.is_sign_negative() {
            return Err(AppError::validation("amount must be non-negative"));
        }
        let amount = amount.round_dp(2);

        let print_quantity = draft
            .print_quantity
            .filter(|q| *q >= 1)
            .unwrap_or(1)
            .min(self.max_print_quantity);

        let mut inner = self.inner.write();

        let record = ProductRecord {
            id: snowflake_id(),
            company_name,
            product_name,
            amount,
            barcode: inner.counter,
            print_quantity,
            date: local_timestamp(),
        };

        let mut history = Vec::with_capacity(inner.history.len() + 1);
        history.push(record.clone());
        history.extend(inner.history.iter().cloned());

        // The counter can be set to any u64, so the increment must not wrap
        let next_counter = inner.counter.checked_add(1).ok_or_else(|| {
            AppError::with_message(ErrorCode::ValueOutOfRange, "barcode counter exhausted")
        })?;
        self.persist(Some(next_counter), Some(&history))?;

        inner.counter = next_counter;
        inner.history = history;

        tracing::info!(
            barcode = record.barcode,
            product = %record.product_name,
            copies = record.print_quantity,
            "Label generated"
        );

        Ok(record)
    }

    // ========== Persistence ==========

    fn persist(&self, counter: Option<u64>, history: Option<&[ProductRecord]>) -> StoreResult<()> {
        let json = history.map(serde_json::to_string).transpose()?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            if let Some(value) = counter {
                table.insert(LAST_BARCODE_KEY, value.to_string().as_str())?;
            }
            if let Some(json) = &json {
                table.insert(PRODUCT_HISTORY_KEY, json.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests;
