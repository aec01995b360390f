//! Reducer applying mutation commands to a [`FinanceState`].

use tracing::{debug, warn};

use crate::{
    domain::{Budget, EntryId, FinanceState, NewBudget, NewTransaction, Transaction},
    errors::FinanceError,
};

/// Closed set of mutations the store accepts.
#[derive(Debug, Clone)]
pub enum Command {
    AddTransaction(NewTransaction),
    UpdateTransaction(Transaction),
    DeleteTransaction(EntryId),
    AddBudget(NewBudget),
    UpdateBudget(Budget),
    DeleteBudget(EntryId),
    LoadState(FinanceState),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddTransaction(_) => "add_transaction",
            Command::UpdateTransaction(_) => "update_transaction",
            Command::DeleteTransaction(_) => "delete_transaction",
            Command::AddBudget(_) => "add_budget",
            Command::UpdateBudget(_) => "update_budget",
            Command::DeleteBudget(_) => "delete_budget",
            Command::LoadState(_) => "load_state",
        }
    }
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(EntryId),
    Updated,
    Deleted,
    Unchanged,
    Loaded,
}

impl Outcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

/// Applies `command` to `state`, returning a new state. The input is never
/// modified.
///
/// Updates that target an unknown id fail with a not-found error. Deletes of
/// an unknown id succeed with [`Outcome::Unchanged`].
pub fn apply(
    state: &FinanceState,
    command: Command,
) -> Result<(FinanceState, Outcome), FinanceError> {
    debug!(command = command.name(), "applying command");
    match command {
        Command::AddTransaction(draft) => {
            let id = EntryId::generate();
            let mut next = state.clone();
            next.transactions.push(draft.into_transaction(id.clone()));
            Ok((next, Outcome::Added(id)))
        }
        Command::UpdateTransaction(updated) => {
            let next = FinanceState {
                transactions: replace_by_id(&state.transactions, updated, |t| &t.id)
                    .map_err(FinanceError::TransactionNotFound)?,
                ..state.clone()
            };
            Ok((next, Outcome::Updated))
        }
        Command::DeleteTransaction(id) => {
            match remove_by_id(&state.transactions, &id, |t| &t.id) {
                Some(transactions) => Ok((
                    FinanceState {
                        transactions,
                        ..state.clone()
                    },
                    Outcome::Deleted,
                )),
                None => Ok((state.clone(), Outcome::Unchanged)),
            }
        }
        Command::AddBudget(draft) => {
            if state.has_budget_for(&draft.category, draft.month) {
                warn!(
                    category = %draft.category,
                    month = %draft.month,
                    "adding a second budget for the same category and month"
                );
            }
            let id = EntryId::generate();
            let mut next = state.clone();
            next.budgets.push(draft.into_budget(id.clone()));
            Ok((next, Outcome::Added(id)))
        }
        Command::UpdateBudget(updated) => {
            let next = FinanceState {
                budgets: replace_by_id(&state.budgets, updated, |b| &b.id)
                    .map_err(FinanceError::BudgetNotFound)?,
                ..state.clone()
            };
            Ok((next, Outcome::Updated))
        }
        Command::DeleteBudget(id) => match remove_by_id(&state.budgets, &id, |b| &b.id) {
            Some(budgets) => Ok((
                FinanceState {
                    budgets,
                    ..state.clone()
                },
                Outcome::Deleted,
            )),
            None => Ok((state.clone(), Outcome::Unchanged)),
        },
        // Categories are never taken from the caller.
        Command::LoadState(loaded) => Ok((
            FinanceState::new(loaded.transactions, loaded.budgets),
            Outcome::Loaded,
        )),
    }
}

fn replace_by_id<T: Clone>(
    items: &[T],
    updated: T,
    id_of: impl Fn(&T) -> &EntryId,
) -> Result<Vec<T>, EntryId> {
    let target = id_of(&updated).clone();
    if !items.iter().any(|item| id_of(item) == &target) {
        return Err(target);
    }
    Ok(items
        .iter()
        .map(|item| {
            if id_of(item) == &target {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect())
}

fn remove_by_id<T: Clone>(
    items: &[T],
    id: &EntryId,
    id_of: impl Fn(&T) -> &EntryId,
) -> Option<Vec<T>> {
    if !items.iter().any(|item| id_of(item) == id) {
        return None;
    }
    Some(
        items
            .iter()
            .filter(|item| id_of(item) != id)
            .cloned()
            .collect(),
    )
}
