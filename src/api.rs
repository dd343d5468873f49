//! REST API server for the finance assistant
//!
//! Exposes the entry agent via HTTP endpoints.
//! Stateless: each request carries its own messages.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::agent::{AgentRunner, AgentSpec};

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub assistant: Arc<AgentSpec>,
    pub runner: AgentRunner,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Chat Endpoint
/// =============================

async fn chat_handler(
    State(state): State<ApiState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let Some(user_msg) = req.messages.iter().rfind(|m| m.role == "user") else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("No user message found".into())),
        );
    };

    info!(agent = %state.assistant.name, "Received chat request");

    match state.runner.run(&state.assistant, &user_msg.content).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({
                "agent": state.assistant.name,
                "answer": answer,
            }))),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Agent run failed: {}", e))),
        ),
    }
}

/// =============================
/// Router
/// =============================

pub fn create_router(assistant: Arc<AgentSpec>, runner: AgentRunner) -> Router {
    let state = ApiState { assistant, runner };

    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/api/chat", post(chat_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    assistant: Arc<AgentSpec>,
    runner: AgentRunner,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(assistant, runner);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_envelope() {
        let ok = ApiResponse::success(serde_json::json!({"answer": "hi"}));
        assert!(ok.success);
        assert!(ok.error.is_none());

        let err = ApiResponse::error("boom".into());
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("boom"));
    }
}
