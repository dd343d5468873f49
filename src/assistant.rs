//! Finance assistant agent definition (entry agent)

use crate::agent::AgentSpec;
use crate::gemini::{GeminiClient, GEMINI_MODEL};
use crate::investment::investment_plan_agent;
use crate::profile::PersonalFinanceDetailsTool;
use crate::tools::AgentTool;
use std::sync::Arc;

const DESCRIPTION: &str = "A simple finance assistant that helps with user's finance goals.";

const INSTRUCTION: &str = r#"You are a friendly finance assistant.
You can help answer user's generic questions on finance and help plan
their finance goals. Be more friendly and positive.

You have two tools to use to complete your task.
1. get_user_personal_finance_details - This tool will give you the user's current finance details
2. investment_plan_agent - This tool can perform Google Search to get any
latest information from websites and will be able to ask more details
from the user and plan their savings goal.

ALWAYS use the investment_plan_agent with google_search tool when asked about:
- Stock prices (e.g., "Tesla stock price", "TSLA latest price")
- Market data, financial news, or company information
- ANY question containing words like "latest", "current", "today", "now", "recent"
"#;

/// Build the entry agent. Tool order matters: the nested investment plan
/// agent first, then the profile provider function.
pub fn finance_assistance_agent(client: &GeminiClient) -> Arc<AgentSpec> {
    let investment = investment_plan_agent(client);

    Arc::new(AgentSpec {
        name: "finance_assistance_agent".to_string(),
        model: GEMINI_MODEL.to_string(),
        description: DESCRIPTION.to_string(),
        instruction: INSTRUCTION.to_string(),
        tools: vec![
            Arc::new(AgentTool::new(investment, client.clone())),
            Arc::new(PersonalFinanceDetailsTool),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_agent() -> Arc<AgentSpec> {
        finance_assistance_agent(&GeminiClient::new("test-key".to_string()))
    }

    #[test]
    fn test_exactly_two_tools_in_order() {
        let agent = test_agent();
        assert_eq!(
            agent.tool_names(),
            vec!["investment_plan_agent", "get_user_personal_finance_details"]
        );
    }

    #[test]
    fn test_instruction_delegation_triggers() {
        let agent = test_agent();

        assert!(agent.instruction.contains("investment_plan_agent"));
        assert!(agent
            .instruction
            .contains("get_user_personal_finance_details"));
        assert!(agent.instruction.contains("Stock prices"));
        assert!(agent
            .instruction
            .contains("Market data, financial news, or company information"));
        for keyword in ["latest", "current", "today", "now", "recent"] {
            assert!(
                agent.instruction.contains(keyword),
                "missing recency keyword {}",
                keyword
            );
        }
    }

    #[test]
    fn test_nested_agent_declares_search() {
        let agent = test_agent();
        let declarations = agent.function_declarations();

        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].name, "investment_plan_agent");
        assert_eq!(declarations[1].name, "get_user_personal_finance_details");
    }
}
