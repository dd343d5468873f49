use finance_assistant_agent::{
    agent::AgentRunner, assistant::finance_assistance_agent, config::Config, gemini::GeminiClient,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;

    info!("Finance Assistant Agent starting");

    let client = GeminiClient::new(config.gemini_api_key);
    let assistant = finance_assistance_agent(&client);
    let runner = AgentRunner::new(client);

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "How much can I save every month?".to_string());

    info!(agent = %assistant.name, question = %question, "Running agent");

    match runner.run(&assistant, &question).await {
        Ok(answer) => {
            println!("\n=== {} ===", assistant.name);
            println!("{}", answer);
            Ok(())
        }
        Err(e) => {
            eprintln!("Agent run failed: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}
