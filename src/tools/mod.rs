//! Tool trait and implementations
//!
//! A tool is anything the model may call during response generation: a plain
//! data function, the Google Search capability, or a nested agent. Which tool
//! gets called is the model's decision, not ours.

use crate::agent::{AgentRunner, AgentSpec};
use crate::error::AgentError;
use crate::gemini::{
    Content, GeminiClient, GenerateRequest, GenerationConfig, SystemInstruction, ToolDecl,
};
use crate::models::{ToolInput, ToolOutput};
use crate::Result;
use serde_json::{json, Value};
use std::sync::Arc;

/// Trait for a single callable tool
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// JSON schema of the tool's parameters, as declared to the model.
    fn parameters_schema(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput>;
}

fn require_query(input: &ToolInput) -> Result<String> {
    input
        .parameters
        .get("request")
        .and_then(|v| v.as_str())
        .or_else(|| input.parameters.get("query").and_then(|v| v.as_str()))
        .map(|s| s.to_string())
        .ok_or_else(|| {
            AgentError::InvalidToolInput(
                "Expected 'request' (or 'query') in tool_input".to_string(),
            )
        })
}

//
// ================= Google Search =================
//

/// Web search capability, served by Gemini's built-in Google Search tool.
/// The search result schema is opaque: the grounded answer text is relayed
/// back untouched.
pub struct GoogleSearchTool {
    client: GeminiClient,
    model: String,
}

impl GoogleSearchTool {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for GoogleSearchTool {
    fn name(&self) -> &str {
        "google_search"
    }

    fn description(&self) -> &str {
        "Perform a Google Search to retrieve the latest information from websites"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "request": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["request"]
        })
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let query = require_query(input)?;

        let request = GenerateRequest {
            contents: vec![Content::user_text(&query)],
            tools: Some(vec![ToolDecl::google_search()]),
            generation_config: GenerationConfig::default(),
            system_instruction: Some(SystemInstruction::from_text(
                "Answer using Google Search. Report factual data with specific \
                 numbers and name the sources.",
            )),
        };

        let response = self.client.generate(&self.model, &request).await?;
        let answer = response.first_text().ok_or_else(|| {
            AgentError::ToolError("Google Search returned no text".to_string())
        })?;

        Ok(ToolOutput {
            success: true,
            data: json!({ "answer": answer }),
            error: None,
        })
    }
}

//
// ================= Agent-as-Tool =================
//

/// Wraps a nested agent as a callable tool, so a parent agent's model can
/// delegate a request to it like any other function.
pub struct AgentTool {
    spec: Arc<AgentSpec>,
    runner: AgentRunner,
}

impl AgentTool {
    pub fn new(spec: Arc<AgentSpec>, client: GeminiClient) -> Self {
        Self {
            spec,
            runner: AgentRunner::new(client),
        }
    }

    pub fn spec(&self) -> &Arc<AgentSpec> {
        &self.spec
    }
}

#[async_trait::async_trait]
impl Tool for AgentTool {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn description(&self) -> &str {
        &self.spec.description
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "request": {
                    "type": "string",
                    "description": "The request to forward to this agent"
                }
            },
            "required": ["request"]
        })
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let request = require_query(input)?;
        let answer = self.runner.run(&self.spec, &request).await?;

        Ok(ToolOutput {
            success: true,
            data: json!({ "answer": answer }),
            error: None,
        })
    }
}
