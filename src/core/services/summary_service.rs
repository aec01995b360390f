use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{DateWindow, FinanceState, Transaction, TransactionKind, YearMonth};

/// Months covered by the dashboard series when the caller has no preference.
pub const DEFAULT_SERIES_MONTHS: u32 = 6;

/// Length of the dashboard's recent-activity list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub count: usize,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FlowTotals {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

impl FlowTotals {
    fn from_parts(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            net: income - expenses,
        }
    }
}

/// Headline figures for the reference month compared with the month before.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodOverview {
    pub month: YearMonth,
    pub current: FlowTotals,
    pub previous: FlowTotals,
    pub income_trend: f64,
    pub expense_trend: f64,
}

/// Search criteria for listing transactions. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                txn.description.to_lowercase().contains(&term)
                    || txn.category.to_lowercase().contains(&term)
            }
            _ => true,
        };
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| txn.category == category);
        let kind_ok = self.kind.map_or(true, |kind| txn.kind == kind);
        search_ok && category_ok && kind_ok
    }
}

/// Pure aggregations over a state snapshot.
pub struct SummaryService;

impl SummaryService {
    pub fn month_totals(state: &FinanceState, window: DateWindow, kind: TransactionKind) -> f64 {
        state
            .transactions
            .iter()
            .filter(|txn| txn.kind == kind && window.contains(txn.date))
            .map(|txn| txn.amount)
            .sum()
    }

    /// Percentage change from `previous` to `current`. A baseline that is not
    /// positive reports 0, which callers must read as "no trend".
    pub fn trend_percent(current: f64, previous: f64) -> f64 {
        if previous > 0.0 {
            (current - previous) / previous * 100.0
        } else {
            0.0
        }
    }

    pub fn flow_totals(state: &FinanceState, window: DateWindow) -> FlowTotals {
        FlowTotals::from_parts(
            Self::month_totals(state, window, TransactionKind::Income),
            Self::month_totals(state, window, TransactionKind::Expense),
        )
    }

    /// One point per calendar month, oldest first, ending at the month of
    /// `reference`.
    pub fn monthly_series(
        state: &FinanceState,
        reference: NaiveDate,
        months: u32,
    ) -> Vec<MonthlyPoint> {
        let last = YearMonth::of(reference);
        (0..months as i32)
            .rev()
            .map(|offset| {
                let month = last.shift(-offset);
                let totals = Self::flow_totals(state, DateWindow::month(month));
                MonthlyPoint {
                    month,
                    income: totals.income,
                    expenses: totals.expenses,
                    net: totals.net,
                }
            })
            .collect()
    }

    /// Per-category totals for `kind` inside `window`, largest first. Ties
    /// keep the order in which categories were first encountered.
    pub fn category_breakdown(
        state: &FinanceState,
        window: DateWindow,
        kind: TransactionKind,
    ) -> Vec<CategoryShare> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut shares: Vec<CategoryShare> = Vec::new();
        for txn in state
            .transactions
            .iter()
            .filter(|txn| txn.kind == kind && window.contains(txn.date))
        {
            let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
                shares.push(CategoryShare {
                    category: txn.category.clone(),
                    amount: 0.0,
                    percentage: 0.0,
                    count: 0,
                    average: 0.0,
                });
                shares.len() - 1
            });
            shares[slot].amount += txn.amount;
            shares[slot].count += 1;
        }

        let total: f64 = shares.iter().map(|share| share.amount).sum();
        for share in &mut shares {
            share.percentage = if total > 0.0 {
                share.amount / total * 100.0
            } else {
                0.0
            };
            share.average = share.amount / share.count as f64;
        }
        shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        shares
    }

    pub fn period_overview(state: &FinanceState, reference: NaiveDate) -> PeriodOverview {
        let month = YearMonth::of(reference);
        let current = Self::flow_totals(state, DateWindow::month(month));
        let previous = Self::flow_totals(state, DateWindow::month(month.shift(-1)));
        PeriodOverview {
            month,
            current,
            previous,
            income_trend: Self::trend_percent(current.income, previous.income),
            expense_trend: Self::trend_percent(current.expenses, previous.expenses),
        }
    }

    /// Most recent transactions by date, newest first.
    pub fn recent_transactions(state: &FinanceState, limit: usize) -> Vec<&Transaction> {
        let mut recent: Vec<&Transaction> = state.transactions.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(limit);
        recent
    }

    /// Transactions matching `filter`, newest first.
    pub fn filter_transactions<'a>(
        state: &'a FinanceState,
        filter: &TransactionFilter,
    ) -> Vec<&'a Transaction> {
        let mut matches: Vec<&Transaction> = state
            .transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }

    pub fn filtered_totals(transactions: &[&Transaction]) -> FlowTotals {
        let income = transactions
            .iter()
            .filter(|txn| txn.is(TransactionKind::Income))
            .map(|txn| txn.amount)
            .sum();
        let expenses = transactions
            .iter()
            .filter(|txn| txn.is(TransactionKind::Expense))
            .map(|txn| txn.amount)
            .sum();
        FlowTotals::from_parts(income, expenses)
    }
}
