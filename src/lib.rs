//! Finance Assistant Agent
//!
//! A Gemini-backed finance assistant composed of two agents:
//! - `finance_assistance_agent` answers generic finance questions and reads
//!   the user's personal finance details through a function tool
//! - `investment_plan_agent` is wired in as a callable sub-agent with a
//!   Google Search capability for anything that needs live market data
//!
//! Tool selection is left entirely to the model: this crate declares the
//! agents (name, model, description, instruction, tools) and relays the
//! function calls the model asks for.

pub mod agent;
pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
pub mod gemini;
pub mod investment;
pub mod models;
pub mod profile;
pub mod tools;

pub use error::Result;

// Re-export common types
pub use agent::{AgentRunner, AgentSpec};
pub use models::*;
