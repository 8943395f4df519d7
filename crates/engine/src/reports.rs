//! Read-only views built from store queries.

use serde::{Deserialize, Serialize};

use crate::ExpenseRecord;

/// Distinct owner names, ascending, optionally narrowed by a substring.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerListing {
    /// The substring that was applied, `None` when listing everyone.
    pub filter: Option<String>,
    pub owners: Vec<String>,
}

impl OwnerListing {
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Message to show instead of an empty list.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.owners.is_empty() {
            return None;
        }
        Some(match self.filter {
            Some(_) => "No users found.",
            None => "No users yet.",
        })
    }
}

/// All expenses of one owner, oldest first, with their sum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnerReport {
    pub owner: String,
    pub expenses: Vec<ExpenseRecord>,
    pub total: f64,
}

impl OwnerReport {
    pub fn new(owner: impl Into<String>, expenses: Vec<ExpenseRecord>) -> Self {
        let total = expenses.iter().map(|record| record.expense.amount).sum();
        Self {
            owner: owner.into(),
            expenses,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expense;

    fn record(id: i64, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            id,
            expense: Expense {
                owner: "Alice".to_string(),
                amount,
                category: "Food".to_string(),
                date: "2024-01-01".to_string(),
                notes: String::new(),
                payment_method: "Cash".to_string(),
                location: String::new(),
            },
        }
    }

    #[test]
    fn empty_message_depends_on_filter() {
        let all = OwnerListing::default();
        assert_eq!(all.empty_message(), Some("No users yet."));

        let searched = OwnerListing {
            filter: Some("zz".to_string()),
            owners: Vec::new(),
        };
        assert_eq!(searched.empty_message(), Some("No users found."));

        let found = OwnerListing {
            filter: Some("li".to_string()),
            owners: vec!["Alice".to_string()],
        };
        assert_eq!(found.empty_message(), None);
        assert!(!found.is_empty());
    }

    #[test]
    fn report_sums_amounts() {
        let report = OwnerReport::new("Alice", vec![record(1, 12.5), record(2, 7.25)]);
        assert_eq!(report.total, 19.75);

        let empty = OwnerReport::new("Nobody", Vec::new());
        assert_eq!(empty.total, 0.0);
    }
}
