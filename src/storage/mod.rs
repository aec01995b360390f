//! Key-value persistence for the user-owned part of the finance state.

pub mod json_backend;
pub mod memory;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{
    domain::{Budget, FinanceState, Transaction},
    errors::FinanceError,
};

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Storage key used when no configuration overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "finance-data";

/// Abstraction over string key-value backends.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// The persisted subset of [`FinanceState`]. Categories are never written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl PersistedState {
    /// Rebuilds a full state, reseeding the default categories.
    pub fn into_state(self) -> FinanceState {
        FinanceState::new(self.transactions, self.budgets)
    }
}

#[derive(Serialize)]
struct PersistedView<'a> {
    transactions: &'a [Transaction],
    budgets: &'a [Budget],
}

/// Reads and writes the persisted shape under a single key.
pub struct PersistenceAdapter {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl PersistenceAdapter {
    pub fn new(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_default_key(backend: Box<dyn KeyValueStore>) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Returns the stored data, or `None` when nothing usable is stored.
    /// Read and parse failures are logged, never returned.
    pub fn load(&self) -> Option<PersistedState> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no persisted finance data");
                return None;
            }
            Err(err) => {
                error!(key = %self.key, error = %err, "failed to read persisted finance data");
                return None;
            }
        };
        match serde_json::from_str::<PersistedState>(&raw) {
            Ok(data) => Some(data),
            Err(err) => {
                error!(key = %self.key, error = %err, "ignoring malformed persisted finance data");
                None
            }
        }
    }

    pub fn save(&self, transactions: &[Transaction], budgets: &[Budget]) -> Result<()> {
        let json = serde_json::to_string(&PersistedView {
            transactions,
            budgets,
        })?;
        self.backend.set(&self.key, &json)
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryId, NewBudget, NewTransaction, TransactionKind, YearMonth};
    use chrono::NaiveDate;

    fn adapter() -> PersistenceAdapter {
        PersistenceAdapter::with_default_key(Box::new(MemoryStore::new()))
    }

    #[test]
    fn missing_key_loads_nothing() {
        assert!(adapter().load().is_none());
    }

    #[test]
    fn malformed_payload_loads_nothing() {
        let adapter = adapter();
        adapter
            .backend()
            .set(DEFAULT_STORAGE_KEY, "{not json")
            .unwrap();
        assert!(adapter.load().is_none());
    }

    #[test]
    fn missing_arrays_default_to_empty() {
        let adapter = adapter();
        adapter
            .backend()
            .set(DEFAULT_STORAGE_KEY, r#"{"transactions":[]}"#)
            .unwrap();
        let loaded = adapter.load().expect("partial payload loads");
        assert!(loaded.budgets.is_empty());
    }

    #[test]
    fn saved_payload_has_only_user_collections() {
        let adapter = adapter();
        let txn = NewTransaction::new(
            20.0,
            "Book",
            NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            "Education",
            TransactionKind::Expense,
        )
        .into_transaction(EntryId::from("t1"));
        let budget = NewBudget::new("Education", 50.0, YearMonth::new(2024, 2).unwrap())
            .into_budget(EntryId::from("b1"));
        adapter.save(&[txn], &[budget]).unwrap();

        let raw = adapter.backend().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["budgets".to_string(), "transactions".to_string()]);
        assert_eq!(value["budgets"][0]["month"], "2024-02");
    }

    #[test]
    fn clear_removes_the_key() {
        let adapter = adapter();
        adapter.save(&[], &[]).unwrap();
        assert!(adapter.load().is_some());
        adapter.clear().unwrap();
        assert!(adapter.load().is_none());
    }
}
