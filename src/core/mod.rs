//! State reduction, the store facade, and the read-side services.

pub mod finance_store;
pub mod services;
pub mod store;
pub mod utils;

pub use finance_store::FinanceStore;
pub use store::{apply, Command, Outcome};
