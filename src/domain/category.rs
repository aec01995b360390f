//! Static category configuration.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;

/// Names that only make sense for income entries.
pub const INCOME_ONLY_CATEGORIES: [&str; 3] = ["Salary", "Freelance", "Investment"];

/// Category usable for both income and expenses.
pub const SHARED_CATEGORY: &str = "Other";

/// Named classification bucket with display metadata. `name` is the join key
/// used by transactions and budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Category {
    pub fn is_income_only(&self) -> bool {
        is_income_only(&self.name)
    }

    pub fn allows(&self, kind: TransactionKind) -> bool {
        match kind {
            TransactionKind::Income => self.is_income_only() || self.name == SHARED_CATEGORY,
            TransactionKind::Expense => !self.is_income_only(),
        }
    }
}

const DEFAULT_CATEGORIES: [(&str, &str, &str, &str); 13] = [
    ("1", "Food & Dining", "UtensilsCrossed", "hsl(24 100% 64%)"),
    ("2", "Transportation", "Car", "hsl(214 84% 56%)"),
    ("3", "Housing", "Home", "hsl(142 76% 36%)"),
    ("4", "Utilities", "Zap", "hsl(38 92% 50%)"),
    ("5", "Healthcare", "Heart", "hsl(348 83% 47%)"),
    ("6", "Entertainment", "Music", "hsl(262 83% 58%)"),
    ("7", "Shopping", "ShoppingBag", "hsl(24 100% 64%)"),
    ("8", "Education", "GraduationCap", "hsl(214 84% 56%)"),
    ("9", "Travel", "Plane", "hsl(142 76% 36%)"),
    ("10", "Salary", "Briefcase", "hsl(142 76% 36%)"),
    ("11", "Freelance", "Laptop", "hsl(214 84% 56%)"),
    ("12", "Investment", "TrendingUp", "hsl(262 83% 58%)"),
    ("13", "Other", "MoreHorizontal", "hsl(215 16% 47%)"),
];

/// The fixed category list reseeded on every load.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, icon, color)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            icon: (*icon).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}

pub fn is_income_only(name: &str) -> bool {
    INCOME_ONLY_CATEGORIES.contains(&name)
}

/// Categories offered for a transaction of the given kind.
pub fn categories_for_kind(categories: &[Category], kind: TransactionKind) -> Vec<&Category> {
    categories
        .iter()
        .filter(|category| category.allows(kind))
        .collect()
}
