use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{
    budget::Budget,
    category::{default_categories, Category},
    common::{EntryId, YearMonth},
    transaction::Transaction,
};

/// The canonical collections held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceState {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

impl Default for FinanceState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl FinanceState {
    /// Builds a state from user data; categories always come from the defaults.
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
            categories: default_categories(),
        }
    }

    pub fn transaction(&self, id: &EntryId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| &txn.id == id)
    }

    pub fn budget(&self, id: &EntryId) -> Option<&Budget> {
        self.budgets.iter().find(|budget| &budget.id == id)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn budgets_for_month(&self, month: YearMonth) -> impl Iterator<Item = &Budget> {
        self.budgets.iter().filter(move |budget| budget.month == month)
    }

    pub fn has_budget_for(&self, category: &str, month: YearMonth) -> bool {
        self.budgets_for_month(month)
            .any(|budget| budget.category == category)
    }
}

/// Detects dangling category names and duplicate budgets. None of these are
/// rejected; aggregation treats every string as its own bucket.
pub fn state_warnings(state: &FinanceState) -> Vec<String> {
    let known: HashSet<&str> = state.categories.iter().map(|c| c.name.as_str()).collect();
    let mut warnings = Vec::new();

    for txn in &state.transactions {
        if !known.contains(txn.category.as_str()) {
            warnings.push(format!(
                "transaction {} references unknown category `{}`",
                txn.id, txn.category
            ));
        }
    }

    let mut seen: HashMap<(&str, YearMonth), usize> = HashMap::new();
    for budget in &state.budgets {
        if !known.contains(budget.category.as_str()) {
            warnings.push(format!(
                "budget {} references unknown category `{}`",
                budget.id, budget.category
            ));
        }
        let count = seen
            .entry((budget.category.as_str(), budget.month))
            .or_insert(0);
        *count += 1;
        if *count == 2 {
            warnings.push(format!(
                "multiple budgets for `{}` in {}",
                budget.category, budget.month
            ));
        }
    }
    warnings
}
