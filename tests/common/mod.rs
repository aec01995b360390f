#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use finance_core::{
    domain::{NewTransaction, TransactionKind},
    storage::{JsonFileStore, MemoryStore},
    FinanceStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const KEY: &str = "finance-data";

/// Creates an isolated data directory for a single test.
pub fn temp_data_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().join("data");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn file_store(dir: &Path) -> FinanceStore {
    let backend = JsonFileStore::new(dir.to_path_buf()).expect("create json file store");
    FinanceStore::with_backend(Box::new(backend), KEY)
}

pub fn memory_store() -> FinanceStore {
    FinanceStore::with_backend(Box::new(MemoryStore::new()), KEY)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn expense(amount: f64, category: &str, day: NaiveDate) -> NewTransaction {
    NewTransaction::new(
        amount,
        format!("{category} spend"),
        day,
        category,
        TransactionKind::Expense,
    )
}

pub fn income(amount: f64, category: &str, day: NaiveDate) -> NewTransaction {
    NewTransaction::new(
        amount,
        format!("{category} income"),
        day,
        category,
        TransactionKind::Income,
    )
}
