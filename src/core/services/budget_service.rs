use std::fmt;

use serde::Serialize;

use crate::domain::{Budget, Category, FinanceState, TransactionKind, YearMonth};

const WARNING_THRESHOLD: f64 = 80.0;
const LIMIT_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Good,
    Warning,
    Over,
}

impl BudgetHealth {
    /// `Over` above 100 %, `Warning` above 80 % up to 100 %, otherwise `Good`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > LIMIT_THRESHOLD {
            BudgetHealth::Over
        } else if percentage > WARNING_THRESHOLD {
            BudgetHealth::Warning
        } else {
            BudgetHealth::Good
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetHealth::Good => "good",
            BudgetHealth::Warning => "warning",
            BudgetHealth::Over => "over",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub budget: Budget,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub status: BudgetHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
}

pub struct BudgetService;

impl BudgetService {
    /// Expenses recorded against `budget`'s category inside its month.
    pub fn spent_for(state: &FinanceState, budget: &Budget) -> f64 {
        state
            .transactions
            .iter()
            .filter(|txn| {
                txn.kind == TransactionKind::Expense
                    && txn.category == budget.category
                    && budget.month.contains(txn.date)
            })
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn progress(state: &FinanceState, budget: &Budget) -> BudgetProgress {
        let spent = Self::spent_for(state, budget);
        let percentage = if budget.amount > 0.0 {
            spent / budget.amount * 100.0
        } else if spent > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };
        BudgetProgress {
            budget: budget.clone(),
            spent,
            remaining: budget.amount - spent,
            percentage,
            status: BudgetHealth::from_percentage(percentage),
        }
    }

    /// Progress of every budget set for `month`, highest percentage first.
    /// Duplicate budgets for one category each get their own entry.
    pub fn budget_status(state: &FinanceState, month: YearMonth) -> Vec<BudgetProgress> {
        let mut rows: Vec<BudgetProgress> = state
            .budgets_for_month(month)
            .map(|budget| Self::progress(state, budget))
            .collect();
        rows.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        rows
    }

    /// Budgets at warning level or beyond.
    pub fn budget_alerts(state: &FinanceState, month: YearMonth) -> Vec<BudgetProgress> {
        Self::budget_status(state, month)
            .into_iter()
            .filter(|row| row.status != BudgetHealth::Good)
            .collect()
    }

    pub fn budget_overview(state: &FinanceState, month: YearMonth) -> BudgetOverview {
        let rows = Self::budget_status(state, month);
        let total_budget: f64 = rows.iter().map(|row| row.budget.amount).sum();
        let total_spent: f64 = rows.iter().map(|row| row.spent).sum();
        BudgetOverview {
            total_budget,
            total_spent,
            remaining: total_budget - total_spent,
        }
    }

    /// Expense categories without a budget in `month`.
    pub fn unbudgeted_categories(state: &FinanceState, month: YearMonth) -> Vec<&Category> {
        state
            .categories
            .iter()
            .filter(|category| !category.is_income_only())
            .filter(|category| !state.has_budget_for(&category.name, month))
            .collect()
    }
}
