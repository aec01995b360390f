//! Finance domain models: transactions, budgets, categories, and the state
//! that holds them. No I/O lives here.

pub mod budget;
pub mod category;
pub mod common;
pub mod state;
pub mod transaction;

pub use budget::{Budget, NewBudget};
pub use category::{categories_for_kind, default_categories, is_income_only, Category};
pub use common::{parse_date, DateWindow, EntryId, Identifiable, YearMonth};
pub use state::{state_warnings, FinanceState};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
