//! Investment plan agent definition

use crate::agent::AgentSpec;
use crate::gemini::{GeminiClient, GEMINI_MODEL};
use crate::tools::GoogleSearchTool;
use std::sync::Arc;

const DESCRIPTION: &str = "An investment plan assistant who can use Google Search to find \
latest information and assist users in creating a savings plan";

const INSTRUCTION: &str = r#"You are a friendly finance assistant.
You can help analyse user's monthly spending and find out ways to
reduce spending and increase savings to achieve their goal.

ALWAYS use the google_search tool when asked about:
- Stock prices (e.g., "Tesla stock price", "TSLA latest price")
- Market data, financial news, or company information
- ANY question containing words like "latest", "current", "today", "now", "recent"

After searching, provide the factual data from the search results with specific numbers and sources.
"#;

/// Build the investment plan agent: one tool, the Google Search capability.
pub fn investment_plan_agent(client: &GeminiClient) -> Arc<AgentSpec> {
    Arc::new(AgentSpec {
        name: "investment_plan_agent".to_string(),
        model: GEMINI_MODEL.to_string(),
        description: DESCRIPTION.to_string(),
        instruction: INSTRUCTION.to_string(),
        tools: vec![Arc::new(GoogleSearchTool::new(
            client.clone(),
            GEMINI_MODEL,
        ))],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_agent() -> Arc<AgentSpec> {
        investment_plan_agent(&GeminiClient::new("test-key".to_string()))
    }

    #[test]
    fn test_single_search_tool() {
        let agent = test_agent();
        assert_eq!(agent.tool_names(), vec!["google_search"]);
    }

    #[test]
    fn test_instruction_search_triggers() {
        let agent = test_agent();

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
    fn test_model_identifier() {
        assert_eq!(test_agent().model, "gemini-2.5-flash");
    }
}
