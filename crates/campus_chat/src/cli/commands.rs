//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Campus chatbot - ask natural-language questions about schedules, rooms and teachers
#[derive(Parser, Debug)]
#[command(name = "campus-chat")]
#[command(about = "Ask natural-language questions about campus schedules, rooms and teachers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question and exit
    Ask {
        /// The question to answer
        question: String,
    },

    /// Interactive prompt: one question per line, 'exit' to leave
    Repl,
}
