//! Campus schedule chatbot facade.
//!
//! Re-exports the workspace crates behind one name and provides the
//! configuration and rendering pieces used by the CLI binary.
//!
//! # Pipeline
//!
//! A question flows through three steps: query synthesis (LLM, deterministic),
//! query execution (one read against the schedule database) and answer
//! synthesis (LLM, moderate temperature). Failures are classified into a
//! fixed set of user-facing message/code pairs instead of surfacing raw
//! errors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod render;

pub use config::Config;
pub use render::{render_answer, render_error};

pub use campus_chat_core::{
    GenerateRequest, GenerateResponse, Message, QueryOutput, Role, Session,
};
pub use campus_chat_database::{DatabaseConfig, ScheduleDb, establish_connection};
pub use campus_chat_error::{
    CampusChatError, CampusChatErrorKind, CampusChatResult, ConfigError, ConfigErrorKind,
    DatabaseError, DatabaseErrorKind, GeminiError, GeminiErrorKind,
};
pub use campus_chat_interface::{ChatDriver, ScheduleGateway};
pub use campus_chat_models::GeminiClient;
pub use campus_chat_pipeline::{
    ChatOutcome, ClassifiedError, ErrorCode, Pipeline, classify, classify_details,
};
