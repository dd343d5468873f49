//! Environment configuration

use crate::error::AgentError;
use crate::Result;
use std::env;

/// Process configuration, resolved once at startup from the environment
/// (with `.env` support).
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let gemini_api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            AgentError::ConfigError("GEMINI_API_KEY is not set (see .env.example)".to_string())
        })?;

        let port = env::var("PORT")
            .or_else(|_| env::var("API_PORT"))
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| AgentError::ConfigError(format!("Invalid port: {}", e)))?;

        Ok(Self {
            gemini_api_key,
            port,
        })
    }
}
