//! Lawlens server CLI
//!
//! Reads configuration from environment variables and starts the HTTP
//! server.

use lawlens_server::{config::ServerConfig, start_server, ServerError};
use lawlens_llm::OpenRouterGateway;
use std::env;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    }

    let config = ServerConfig::from_env();

    if config.gateway.api_key.trim().is_empty() {
        eprintln!("Warning: OPENROUTER_API_KEY is not set; analysis calls will fail");
    }

    let gateway = Arc::new(OpenRouterGateway::new(config.gateway.clone()));

    start_server(config, gateway).await?;

    Ok(())
}

fn print_help() {
    println!("Lawlens - Legal Document Analysis API");
    println!();
    println!("USAGE:");
    println!("    lawlens-server");
    println!();
    println!("CONFIGURATION (environment variables, all optional):");
    println!("    OPENROUTER_API_KEY     API key for the LLM provider");
    println!("    OPENROUTER_BASE_URL    Provider base URL (default: https://openrouter.ai/api/v1)");
    println!("    MODEL_NAME             Model identifier (default: openai/gpt-oss-20b:free)");
    println!("    MAX_TOKENS             Max output tokens (default: 4000)");
    println!("    TEMPERATURE            Sampling temperature (default: 0.3)");
    println!("    SITE_URL               Routing header HTTP-Referer (default: http://localhost:5000)");
    println!("    SITE_NAME              Routing header X-Title (default: Lawlens)");
    println!("    HOST                   Bind host (default: 0.0.0.0)");
    println!("    PORT                   Bind port (default: 5000)");
    println!("    MAX_CONTENT_LENGTH     Max upload size in bytes (default: 16 MiB)");
    println!("    ALLOWED_EXTENSIONS     Comma-separated allow-list (default: pdf,txt,docx)");
    println!("    UPLOAD_FOLDER          PDF staging directory (default: system temp)");
    println!();
}
