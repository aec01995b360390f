use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    core::{
        services::{DEFAULT_RECENT_LIMIT, DEFAULT_SERIES_MONTHS},
        utils,
    },
    storage::DEFAULT_STORAGE_KEY,
};

/// Stores user-configurable preferences for the finance store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for persisted data. Defaults to `~/.finance_core`.
    pub data_dir: Option<PathBuf>,

    /// Months covered by [`FinanceStore::monthly_series`](crate::FinanceStore::monthly_series).
    #[serde(default = "Config::default_series_months")]
    pub series_months: u32,
    #[serde(default = "Config::default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: Self::default_storage_key(),
            data_dir: None,
            series_months: Self::default_series_months(),
            recent_limit: Self::default_recent_limit(),
        }
    }
}

impl Config {
    pub fn default_storage_key() -> String {
        DEFAULT_STORAGE_KEY.into()
    }

    pub fn default_series_months() -> u32 {
        DEFAULT_SERIES_MONTHS
    }

    pub fn default_recent_limit() -> usize {
        DEFAULT_RECENT_LIMIT
    }

    /// Directory holding persisted data: the configured path, then
    /// `FINANCE_CORE_HOME`, then `~/.finance_core`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        utils::app_data_dir()
    }
}
