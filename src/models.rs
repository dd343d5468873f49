//! Core data models for the finance assistant

use serde::{Deserialize, Serialize};

//
// ================= Financial Profile =================
//

/// Monthly expense breakdown, serialized under the category names the
/// assistant's instruction refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseBreakdown {
    #[serde(rename = "EMI_Expense")]
    pub emi: u64,
    #[serde(rename = "Essentials")]
    pub essentials: u64,
    #[serde(rename = "Entertainment")]
    pub entertainment: u64,
    #[serde(rename = "Shopping and Travel")]
    pub shopping_and_travel: u64,
}

impl ExpenseBreakdown {
    pub fn total(&self) -> u64 {
        self.emi + self.essentials + self.entertainment + self.shopping_and_travel
    }
}

/// A user's personal finance snapshot: salary, categorized expenses, and
/// savings capacity. Immutable once constructed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinancialProfile {
    pub salary: u64,
    pub expense: ExpenseBreakdown,
    pub savings: u64,
}

impl FinancialProfile {
    /// Expenses plus savings must account for the full salary.
    pub fn is_consistent(&self) -> bool {
        self.expense.total() + self.savings == self.salary
    }
}

//
// ================= Tool I/O =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInput {
    pub tool_name: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub success: bool,
    pub data: serde_json::Value,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> FinancialProfile {
        FinancialProfile {
            salary: 50000,
            expense: ExpenseBreakdown {
                emi: 25000,
                essentials: 5000,
                entertainment: 5000,
                shopping_and_travel: 5000,
            },
            savings: 10000,
        }
    }

    #[test]
    fn test_expense_total() {
        assert_eq!(sample_profile().expense.total(), 40000);
    }

    #[test]
    fn test_profile_consistency() {
        assert!(sample_profile().is_consistent());
    }

    #[test]
    fn test_expense_category_names() {
        let value = serde_json::to_value(sample_profile().expense).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 4);
        for category in [
            "EMI_Expense",
            "Essentials",
            "Entertainment",
            "Shopping and Travel",
        ] {
            assert!(map.contains_key(category), "missing category {}", category);
        }
    }
}
