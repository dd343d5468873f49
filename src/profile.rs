//! Personal finance profile provider
//!
//! Returns the user's finance snapshot. The figures are mock data: a real
//! deployment would source them from a user data service, and this function
//! is the seam where that service plugs in.

use crate::models::{ExpenseBreakdown, FinancialProfile, ToolInput, ToolOutput};
use crate::tools::Tool;
use crate::Result;

/// Gets the user's personal finance details like salary, expense and savings
/// capacity. Deterministic, no inputs, no failure modes.
pub fn get_user_personal_finance_details() -> FinancialProfile {
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

/// Exposes the profile provider as a callable tool.
pub struct PersonalFinanceDetailsTool;

#[async_trait::async_trait]
impl Tool for PersonalFinanceDetailsTool {
    fn name(&self) -> &str {
        "get_user_personal_finance_details"
    }

    fn description(&self) -> &str {
        "Gets the user's personal finance details like salary, expense and savings capacity"
    }

    async fn execute(&self, _input: &ToolInput) -> Result<ToolOutput> {
        let profile = get_user_personal_finance_details();

        Ok(ToolOutput {
            success: true,
            data: serde_json::to_value(profile)?,
            error: None,
        })
    }
}
