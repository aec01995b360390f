use thiserror::Error;

use crate::{config::ConfigError, domain::EntryId};

/// Error type that captures common finance store failures.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(EntryId),
    #[error("Budget not found: {0}")]
    BudgetNotFound(EntryId),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid window: {0}")]
    InvalidWindow(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
