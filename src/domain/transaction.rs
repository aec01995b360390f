//! Income and expense records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

use super::common::{parse_date, EntryId, Identifiable};

pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Direction of money flow. Amounts stay positive; the kind carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntryId,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Amount with the sign implied by the kind.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn is(&self, kind: TransactionKind) -> bool {
        self.kind == kind
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &EntryId {
        &self.id
    }
}

/// Transaction fields as submitted by a caller, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            date,
            category: category.into(),
            kind,
        }
    }

    /// Builds a validated draft from raw form text.
    pub fn parse(
        amount: &str,
        description: &str,
        date: &str,
        category: &str,
        kind: TransactionKind,
    ) -> Result<Self, FinanceError> {
        let amount = parse_amount(amount)?;
        let date = parse_date(date)?;
        let draft = Self::new(amount, description.trim(), date, category.trim(), kind);
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<(), FinanceError> {
        validate_amount(self.amount)?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FinanceError::Validation("description is required".into()));
        }
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(FinanceError::Validation(format!(
                "description must be at most {MAX_DESCRIPTION_CHARS} characters"
            )));
        }
        if self.category.trim().is_empty() {
            return Err(FinanceError::Validation("category is required".into()));
        }
        Ok(())
    }

    pub fn into_transaction(self, id: EntryId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            category: self.category,
            kind: self.kind,
        }
    }
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, FinanceError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FinanceError::Validation(format!("`{raw}` is not a number")))
}

pub(crate) fn validate_amount(amount: f64) -> Result<(), FinanceError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(FinanceError::Validation(
            "amount must be greater than zero".into(),
        ));
    }
    Ok(())
}
