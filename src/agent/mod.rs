//! Agent specification and host loop
//!
//! An `AgentSpec` pairs a model identifier, an instruction prompt, and an
//! ordered tool list. `AgentRunner` relays a user utterance to the model and
//! executes whatever tool calls the model asks for, feeding the results back
//! until the model produces a final text answer.

use crate::error::AgentError;
use crate::gemini::{
    Content, FunctionDeclaration, GeminiClient, GenerateRequest, GenerationConfig,
    SystemInstruction, ToolDecl,
};
use crate::models::ToolInput;
use crate::tools::Tool;
use crate::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Guard against the model looping on tool calls indefinitely.
const MAX_TOOL_TURNS: usize = 8;

/// Immutable agent configuration, built once at startup.
pub struct AgentSpec {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instruction: String,
    pub tools: Vec<Arc<dyn Tool>>,
}

impl AgentSpec {
    /// Tool names in declaration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn find_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .cloned()
    }

    /// Function declarations for the model, one per tool.
    pub fn function_declarations(&self) -> Vec<FunctionDeclaration> {
        self.tools
            .iter()
            .map(|t| FunctionDeclaration {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters_schema(),
            })
            .collect()
    }
}

/// Runs an agent against the Gemini API.
#[derive(Clone)]
pub struct AgentRunner {
    client: GeminiClient,
}

impl AgentRunner {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Run a single user utterance through the agent.
    ///
    /// Conversation state lives only for the duration of this call; any
    /// longer-lived memory belongs to the caller.
    pub async fn run(&self, spec: &AgentSpec, message: &str) -> Result<String> {
        info!(agent = %spec.name, "Agent run started");

        let tools = if spec.tools.is_empty() {
            None
        } else {
            Some(vec![ToolDecl::functions(spec.function_declarations())])
        };

        let mut contents = vec![Content::user_text(message)];

        for turn in 0..MAX_TOOL_TURNS {
            let request = GenerateRequest {
                contents: contents.clone(),
                tools: tools.clone(),
                generation_config: GenerationConfig::default(),
                system_instruction: Some(SystemInstruction::from_text(&spec.instruction)),
            };

            let response = self.client.generate(&spec.model, &request).await?;
            let calls = response.function_calls();

            if calls.is_empty() {
                let answer = response.first_text().ok_or_else(|| {
                    AgentError::LlmError("Empty response from model".to_string())
                })?;

                info!(agent = %spec.name, turns = turn, "Agent run complete");
                return Ok(answer);
            }

            // Echo the model's tool-call turn back before the responses.
            if let Some(candidate) = response.candidates.into_iter().next() {
                contents.push(candidate.content);
            }

            for call in calls {
                debug!(
                    agent = %spec.name,
                    tool = %call.name,
                    "Model requested tool call"
                );

                let tool = spec.find_tool(&call.name).ok_or_else(|| {
                    warn!(agent = %spec.name, tool = %call.name, "Unknown tool requested");
                    AgentError::ToolNotFound(call.name.clone())
                })?;

                let input = ToolInput {
                    tool_name: call.name.clone(),
                    parameters: call.args.clone(),
                };

                let output = tool.execute(&input).await?;
                contents.push(Content::function_response(call.name, output.data));
            }
        }

        warn!(agent = %spec.name, "Tool turn limit exceeded");
        Err(AgentError::ToolTurnLimit(MAX_TOOL_TURNS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ToolInput, ToolOutput};
    use serde_json::json;

    struct NoopTool;

    #[async_trait::async_trait]
    impl Tool for NoopTool {
        fn name(&self) -> &str {
            "noop"
        }

        fn description(&self) -> &str {
            "Does nothing"
        }

        async fn execute(&self, _input: &ToolInput) -> Result<ToolOutput> {
            Ok(ToolOutput {
                success: true,
                data: json!({}),
                error: None,
            })
        }
    }

    fn spec_with_noop() -> AgentSpec {
        AgentSpec {
            name: "test_agent".to_string(),
            model: "test-model".to_string(),
            description: "Test agent".to_string(),
            instruction: "Do nothing.".to_string(),
            tools: vec![Arc::new(NoopTool)],
        }
    }

    #[test]
    fn test_tool_names_in_order() {
        let spec = spec_with_noop();
        assert_eq!(spec.tool_names(), vec!["noop"]);
    }

    #[test]
    fn test_find_tool() {
        let spec = spec_with_noop();
        assert!(spec.find_tool("noop").is_some());
        assert!(spec.find_tool("missing").is_none());
    }

    #[test]
    fn test_function_declarations_match_tools() {
        let spec = spec_with_noop();
        let declarations = spec.function_declarations();

        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].name, "noop");
        assert_eq!(declarations[0].parameters["type"], "object");
    }
}
