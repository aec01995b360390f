pub mod budget_service;
pub mod summary_service;

pub use budget_service::{BudgetHealth, BudgetOverview, BudgetProgress, BudgetService};
pub use summary_service::{
    CategoryShare, FlowTotals, MonthlyPoint, PeriodOverview, SummaryService, TransactionFilter,
    DEFAULT_RECENT_LIMIT, DEFAULT_SERIES_MONTHS,
};
