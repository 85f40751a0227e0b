//! Command execution.

use campus_chat::{Config, render_answer, render_error};
use campus_chat_database::{DatabaseConfig, ScheduleDb, establish_connection};
use campus_chat_error::CampusChatResult;
use campus_chat_models::GeminiClient;
use campus_chat_pipeline::{ChatOutcome, Pipeline, QUERY_TEMPERATURE, REPLY_TEMPERATURE};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Build the production pipeline from configuration.
///
/// Connects to the database, wraps the connection in a gateway, and
/// constructs one model client per sampling configuration.
#[instrument(skip_all)]
fn build_pipeline(config: &Config) -> CampusChatResult<Pipeline<GeminiClient, ScheduleDb>> {
    let db_config = DatabaseConfig::new(&config.db_host, &config.db_password);
    let connection = establish_connection(&db_config)?;
    let gateway = ScheduleDb::new(connection);

    let query_model = GeminiClient::new(&config.gemini_api_key, &config.model, QUERY_TEMPERATURE)?;
    let reply_model = GeminiClient::new(&config.gemini_api_key, &config.model, REPLY_TEMPERATURE)?;

    Pipeline::new(query_model, reply_model, gateway)
}

/// Answer one question and print the result.
pub async fn run_ask(config: &Config, question: &str) -> CampusChatResult<()> {
    let pipeline = build_pipeline(config)?;
    answer_one(&pipeline, question).await;
    Ok(())
}

/// Interactive loop: one question per line, `exit` or `quit` to leave.
pub async fn run_repl(config: &Config) -> CampusChatResult<()> {
    let pipeline = build_pipeline(config)?;

    println!("Campus schedule chatbot. Ask a question, or type 'exit' to leave.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let question = line.trim();
        match question {
            "" => {
                println!("Please enter a question.");
                continue;
            }
            "exit" | "quit" => break,
            _ => answer_one(&pipeline, question).await,
        }
    }

    info!("Session ended");
    Ok(())
}

/// Run one question through the pipeline and print the rendering.
async fn answer_one(pipeline: &Pipeline<GeminiClient, ScheduleDb>, question: &str) {
    match pipeline.ask(question).await {
        ChatOutcome::Answer(session) => println!("{}", render_answer(&session)),
        ChatOutcome::Failed(error) => println!("{}", render_error(&error)),
    }
}
