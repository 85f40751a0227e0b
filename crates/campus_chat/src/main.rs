use campus_chat::{Config, render_error};
use campus_chat_pipeline::classify;
use clap::Parser;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", render_error(&classify(&e.into())));
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Ask { question } => cli::run_ask(&config, &question).await,
        Commands::Repl => cli::run_repl(&config).await,
    };

    if let Err(e) = outcome {
        println!("{}", render_error(&classify(&e)));
        std::process::exit(1);
    }
}
