//! Gemini API client
//!
//! Handles generateContent calls with system instructions, declared function
//! tools, and the built-in Google Search tool.
//! Uses a long-lived reqwest::Client for connection pooling.

use crate::error::AgentError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

/// Model identifier both agents run against.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Reusable Gemini client (connection-pooled)
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Send a generateContent request to the given model.
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> crate::Result<GenerateResponse> {
        if self.api_key.is_empty() {
            return Err(AgentError::ConfigError(
                "GEMINI_API_KEY not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        info!(model, "Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                AgentError::LlmError(format!("Gemini API error: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error response: {}", error_text);
            return Err(AgentError::LlmError(format!(
                "Gemini API error: {}",
                error_text
            )));
        }

        let generate_response: GenerateResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            AgentError::LlmError(format!("Gemini parse error: {}", e))
        })?;

        if generate_response.candidates.is_empty() {
            return Err(AgentError::LlmError(
                "No candidates in Gemini response".to_string(),
            ));
        }

        Ok(generate_response)
    }
}

//
// ================= Request / Response Types =================
//

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDecl>>,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    pub fn function_response(name: impl Into<String>, response: Value) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: None,
                function_call: None,
                function_response: Some(FunctionResponse {
                    name: name.into(),
                    response,
                }),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            function_call: None,
            function_response: None,
        }
    }
}

/// A tool call the model asks the host to perform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: Value,
}

/// One entry of the request's `tools` array: either declared functions the
/// host executes, or the built-in Google Search tool Gemini runs itself.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolDecl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_declarations: Option<Vec<FunctionDeclaration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearchDecl>,
}

impl ToolDecl {
    pub fn functions(declarations: Vec<FunctionDeclaration>) -> Self {
        Self {
            function_declarations: Some(declarations),
            google_search: None,
        }
    }

    pub fn google_search() -> Self {
        Self {
            function_declarations: None,
            google_search: Some(GoogleSearchDecl {}),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleSearchDecl {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: i32,
    pub max_output_tokens: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
    pub finish_reason: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    pub fn first_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.parts;
        let text: Vec<&str> = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text.join(""))
        }
    }

    /// Function calls requested by the first candidate, in order.
    pub fn function_calls(&self) -> Vec<FunctionCall> {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.function_call.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            contents: vec![Content::user_text("What is an index fund?")],
            tools: Some(vec![ToolDecl::functions(vec![FunctionDeclaration {
                name: "get_user_personal_finance_details".to_string(),
                description: "Gets the user's finance details".to_string(),
                parameters: json!({"type": "object", "properties": {}}),
            }])]),
            generation_config: GenerationConfig::default(),
            system_instruction: Some(SystemInstruction::from_text(
                "You are a friendly finance assistant.",
            )),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("What is an index fund?"));
        assert!(json.contains("functionDeclarations"));
        assert!(json.contains("systemInstruction"));
    }

    #[test]
    fn test_google_search_tool_serialization() {
        let decl = ToolDecl::google_search();
        let json = serde_json::to_string(&decl).unwrap();
        assert_eq!(json, r#"{"googleSearch":{}}"#);
    }

    #[test]
    fn test_function_call_response_parsing() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{
                        "functionCall": {
                            "name": "get_user_personal_finance_details",
                            "args": {}
                        }
                    }]
                },
                "finishReason": "STOP"
            }]
        });

        let response: GenerateResponse = serde_json::from_value(raw).unwrap();
        let calls = response.function_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "get_user_personal_finance_details");
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_text_response_parsing() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "An index fund tracks a market index."}]
                },
                "finishReason": "STOP"
            }]
        });

        let response: GenerateResponse = serde_json::from_value(raw).unwrap();
        assert!(response.function_calls().is_empty());
        assert_eq!(
            response.first_text().unwrap(),
            "An index fund tracks a market index."
        );
    }
}
