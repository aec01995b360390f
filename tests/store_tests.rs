mod common;

use common::{date, expense, income, memory_store};
use finance_core::{
    domain::{default_categories, Category, EntryId, FinanceState, NewBudget, YearMonth},
    Command, FinanceError, Outcome,
};

#[test]
fn add_transaction_is_retrievable_by_returned_id() {
    let mut store = memory_store();
    let draft = expense(42.5, "Food & Dining", date(2024, 5, 10));

    let id = store.add_transaction(draft.clone()).expect("add");

    assert_eq!(store.state().transactions.len(), 1);
    let stored = store.state().transaction(&id).expect("stored");
    assert_eq!(stored, &draft.into_transaction(id.clone()));
}

#[test]
fn delete_transaction_removes_only_that_entry() {
    let mut store = memory_store();
    let keep = store
        .add_transaction(income(1000.0, "Salary", date(2024, 5, 1)))
        .unwrap();
    let gone = store
        .add_transaction(expense(12.0, "Transportation", date(2024, 5, 2)))
        .unwrap();

    assert!(store.delete_transaction(&gone).unwrap());

    assert!(store.state().transaction(&gone).is_none());
    assert!(store.state().transaction(&keep).is_some());
}

#[test]
fn deleting_unknown_id_leaves_transactions_unchanged() {
    let mut store = memory_store();
    store
        .add_transaction(expense(9.0, "Shopping", date(2024, 5, 3)))
        .unwrap();
    let before = store.state().transactions.clone();

    let outcome = store
        .dispatch(Command::DeleteTransaction(EntryId::from("missing")))
        .unwrap();

    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(store.state().transactions, before);
}

#[test]
fn update_preserves_unrelated_transactions() {
    let mut store = memory_store();
    let first = store
        .add_transaction(expense(10.0, "Utilities", date(2024, 5, 5)))
        .unwrap();
    let second = store
        .add_transaction(expense(20.0, "Healthcare", date(2024, 5, 6)))
        .unwrap();
    let untouched = store.state().transaction(&second).cloned().unwrap();

    let mut edited = store.state().transaction(&first).cloned().unwrap();
    edited.amount = 15.0;
    edited.description = "Electricity".into();
    store.update_transaction(edited.clone()).unwrap();

    assert_eq!(store.state().transaction(&first), Some(&edited));
    assert_eq!(store.state().transaction(&second), Some(&untouched));
    assert_eq!(store.state().transactions.len(), 2);
}

#[test]
fn updating_unknown_transaction_reports_not_found() {
    let mut store = memory_store();
    let ghost = expense(1.0, "Other", date(2024, 5, 1)).into_transaction(EntryId::from("ghost"));

    let err = store.update_transaction(ghost).unwrap_err();

    assert!(matches!(err, FinanceError::TransactionNotFound(_)));
    assert!(store.state().transactions.is_empty());
}

#[test]
fn budget_commands_mirror_transaction_commands() {
    let mut store = memory_store();
    let month = YearMonth::new(2024, 5).unwrap();
    let id = store
        .add_budget(NewBudget::new("Housing", 1200.0, month))
        .unwrap();

    let mut budget = store.state().budget(&id).cloned().unwrap();
    budget.amount = 1300.0;
    store.update_budget(budget).unwrap();
    assert_eq!(store.state().budget(&id).unwrap().amount, 1300.0);

    assert!(store.delete_budget(&id).unwrap());
    assert!(store.state().budgets.is_empty());
    assert!(!store.delete_budget(&id).unwrap());

    let err = store
        .update_budget(NewBudget::new("Housing", 1.0, month).into_budget(id))
        .unwrap_err();
    assert!(matches!(err, FinanceError::BudgetNotFound(_)));
}

#[test]
fn duplicate_budgets_are_permitted() {
    let mut store = memory_store();
    let month = YearMonth::new(2024, 5).unwrap();
    store
        .add_budget(NewBudget::new("Travel", 100.0, month))
        .unwrap();
    store
        .add_budget(NewBudget::new("Travel", 50.0, month))
        .unwrap();
    assert_eq!(store.state().budgets.len(), 2);
}

#[test]
fn store_accepts_semantically_odd_input() {
    let mut store = memory_store();
    let month = YearMonth::new(2024, 5).unwrap();
    store
        .add_budget(NewBudget::new("Nonexistent", 0.0, month))
        .expect("store does not re-validate");
    store
        .add_transaction(expense(-3.0, "Mystery", date(2024, 5, 1)))
        .expect("store does not re-validate");
    assert_eq!(store.state().budgets.len(), 1);
    assert_eq!(store.state().transactions.len(), 1);
}

#[test]
fn load_state_reseeds_default_categories() {
    let mut store = memory_store();
    let mut loaded = FinanceState::new(
        vec![expense(9.0, "Custom", date(2024, 5, 2)).into_transaction(EntryId::from("t-1"))],
        Vec::new(),
    );
    loaded.categories = vec![Category {
        id: "custom".into(),
        name: "Custom".into(),
        icon: "?".into(),
        color: "hsl(0, 0%, 50%)".into(),
    }];

    let outcome = store.dispatch(Command::LoadState(loaded)).unwrap();

    assert_eq!(outcome, Outcome::Loaded);
    assert_eq!(store.state().categories, default_categories());
    assert_eq!(store.state().transactions.len(), 1);
}
