use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    config::{Config, ConfigManager},
    domain::{
        state_warnings, Budget, EntryId, FinanceState, NewBudget, NewTransaction, Transaction,
    },
    errors::FinanceError,
    storage::{JsonFileStore, KeyValueStore, PersistenceAdapter},
};

use super::{
    services::{MonthlyPoint, SummaryService},
    store::{apply, Command, Outcome},
    utils,
};

/// Facade that owns the current finance state and keeps storage in sync.
///
/// Every accepted command swaps in a fresh snapshot; snapshots handed out
/// earlier keep their contents.
pub struct FinanceStore {
    state: Arc<FinanceState>,
    persistence: PersistenceAdapter,
    config: Config,
    last_save_error: Option<String>,
}

impl FinanceStore {
    /// Loads persisted transactions and budgets (or starts empty) and reseeds
    /// the default categories.
    pub fn init(persistence: PersistenceAdapter) -> Self {
        let initial = match persistence.load() {
            Some(data) => {
                let state = data.into_state();
                info!(
                    transactions = state.transactions.len(),
                    budgets = state.budgets.len(),
                    "loaded finance data"
                );
                state
            }
            None => FinanceState::default(),
        };
        for warning in state_warnings(&initial) {
            warn!("{warning}");
        }
        Self {
            state: Arc::new(initial),
            persistence,
            config: Config::default(),
            last_save_error: None,
        }
    }

    /// Opens the file-backed store described by `config`.
    pub fn open(config: &Config) -> Result<Self, FinanceError> {
        let backend = JsonFileStore::new(config.resolve_data_dir())?;
        let mut store = Self::with_backend(Box::new(backend), &config.storage_key);
        store.config = config.clone();
        Ok(store)
    }

    /// Reads `config.json` from `base` (defaults when absent) and opens the
    /// store it describes. Data lives in `base` unless the config overrides it.
    pub fn open_in(base: PathBuf) -> Result<Self, FinanceError> {
        let config = ConfigManager::with_base_dir(base.clone())?.load()?;
        let data_dir = config.data_dir.clone().unwrap_or(base);
        Self::open(&Config {
            data_dir: Some(data_dir),
            ..config
        })
    }

    /// [`open_in`](Self::open_in) on the application data directory.
    pub fn open_default() -> Result<Self, FinanceError> {
        Self::open_in(utils::app_data_dir())
    }

    pub fn with_backend(backend: Box<dyn KeyValueStore>, key: &str) -> Self {
        Self::init(PersistenceAdapter::new(backend, key))
    }

    pub fn state(&self) -> &FinanceState {
        &self.state
    }

    pub fn snapshot(&self) -> Arc<FinanceState> {
        Arc::clone(&self.state)
    }

    pub fn persistence(&self) -> &PersistenceAdapter {
        &self.persistence
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dashboard series ending at `reference`, sized by `series_months`.
    pub fn monthly_series(&self, reference: NaiveDate) -> Vec<MonthlyPoint> {
        SummaryService::monthly_series(&self.state, reference, self.config.series_months)
    }

    /// Newest transactions, capped at `recent_limit`.
    pub fn recent_transactions(&self) -> Vec<&Transaction> {
        SummaryService::recent_transactions(&self.state, self.config.recent_limit)
    }

    /// Message from the most recent failed save, cleared by the next success.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// Applies `command` and persists the user collections when they changed.
    /// Storage failures are logged and recorded, never returned.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, FinanceError> {
        let (next, outcome) = apply(&self.state, command)?;
        self.state = Arc::new(next);
        if outcome.changed() {
            self.persist();
        }
        Ok(outcome)
    }

    pub fn add_transaction(&mut self, draft: NewTransaction) -> Result<EntryId, FinanceError> {
        match self.dispatch(Command::AddTransaction(draft))? {
            Outcome::Added(id) => Ok(id),
            other => Err(FinanceError::Storage(format!(
                "unexpected outcome for add: {other:?}"
            ))),
        }
    }

    pub fn update_transaction(&mut self, transaction: Transaction) -> Result<(), FinanceError> {
        self.dispatch(Command::UpdateTransaction(transaction))
            .map(|_| ())
    }

    /// Returns `true` when a transaction was removed.
    pub fn delete_transaction(&mut self, id: &EntryId) -> Result<bool, FinanceError> {
        self.dispatch(Command::DeleteTransaction(id.clone()))
            .map(|outcome| outcome == Outcome::Deleted)
    }

    pub fn add_budget(&mut self, draft: NewBudget) -> Result<EntryId, FinanceError> {
        match self.dispatch(Command::AddBudget(draft))? {
            Outcome::Added(id) => Ok(id),
            other => Err(FinanceError::Storage(format!(
                "unexpected outcome for add: {other:?}"
            ))),
        }
    }

    pub fn update_budget(&mut self, budget: Budget) -> Result<(), FinanceError> {
        self.dispatch(Command::UpdateBudget(budget)).map(|_| ())
    }

    pub fn delete_budget(&mut self, id: &EntryId) -> Result<bool, FinanceError> {
        self.dispatch(Command::DeleteBudget(id.clone()))
            .map(|outcome| outcome == Outcome::Deleted)
    }

    fn persist(&mut self) {
        match self
            .persistence
            .save(&self.state.transactions, &self.state.budgets)
        {
            Ok(()) => self.last_save_error = None,
            Err(err) => {
                warn!(key = self.persistence.key(), error = %err, "failed to persist finance data");
                self.last_save_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use crate::storage::{MemoryStore, Result as StorageResult};
    use chrono::NaiveDate;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(FinanceError::Storage("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    fn draft() -> NewTransaction {
        NewTransaction::new(
            25.0,
            "Cinema",
            NaiveDate::from_ymd_opt(2024, 5, 18).unwrap(),
            "Entertainment",
            TransactionKind::Expense,
        )
    }

    #[test]
    fn save_failure_does_not_fail_the_mutation() {
        let mut store = FinanceStore::with_backend(Box::new(FailingStore), "finance-data");
        let id = store.add_transaction(draft()).expect("mutation succeeds");
        assert!(store.state().transaction(&id).is_some());
        assert!(store
            .last_save_error()
            .is_some_and(|msg| msg.contains("quota exceeded")));
    }

    #[test]
    fn snapshots_survive_later_mutations() {
        let mut store = FinanceStore::with_backend(Box::new(MemoryStore::new()), "finance-data");
        let before = store.snapshot();
        store.add_transaction(draft()).unwrap();
        assert!(before.transactions.is_empty());
        assert_eq!(store.state().transactions.len(), 1);
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let mut store = FinanceStore::with_backend(Box::new(MemoryStore::new()), "finance-data");
        let id = store.add_transaction(draft()).unwrap();
        assert!(store.delete_transaction(&id).unwrap());
        assert!(!store.delete_transaction(&id).unwrap());
    }
}
