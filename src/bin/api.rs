use finance_assistant_agent::{
    agent::AgentRunner, api::start_server, assistant::finance_assistance_agent, config::Config,
    gemini::GeminiClient,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;

    info!("Finance Assistant Agent - API Server");
    info!("Port: {}", config.port);

    let client = GeminiClient::new(config.gemini_api_key);
    let assistant = finance_assistance_agent(&client);
    let runner = AgentRunner::new(client);

    info!(agent = %assistant.name, tools = ?assistant.tool_names(), "Agent initialized");

    start_server(assistant, runner, config.port).await?;

    Ok(())
}
