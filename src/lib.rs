#![doc(test(attr(deny(warnings))))]

//! Finance Core holds the transaction, budget, and category state behind a
//! personal-finance dashboard: a reducer over a closed set of commands, a
//! key-value persistence adapter, and pure aggregation queries.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{
    services::{BudgetService, SummaryService},
    Command, FinanceStore, Outcome,
};
pub use errors::FinanceError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
