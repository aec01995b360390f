use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

use super::common::{EntryId, Identifiable, YearMonth};
use super::transaction::{parse_amount, validate_amount};

/// A monthly spending ceiling for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: EntryId,
    pub category: String,
    pub amount: f64,
    pub month: YearMonth,
}

impl Identifiable for Budget {
    fn id(&self) -> &EntryId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: String,
    pub amount: f64,
    pub month: YearMonth,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, amount: f64, month: YearMonth) -> Self {
        Self {
            category: category.into(),
            amount,
            month,
        }
    }

    pub fn parse(category: &str, amount: &str, month: &str) -> Result<Self, FinanceError> {
        let draft = Self::new(category.trim(), parse_amount(amount)?, month.parse()?);
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<(), FinanceError> {
        validate_amount(self.amount)?;
        if self.category.trim().is_empty() {
            return Err(FinanceError::Validation("category is required".into()));
        }
        Ok(())
    }

    pub fn into_budget(self, id: EntryId) -> Budget {
        Budget {
            id,
            category: self.category,
            amount: self.amount,
            month: self.month,
        }
    }
}
