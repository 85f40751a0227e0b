//! Error types for the campus-chat workspace.
//!
//! This crate provides the foundation error types used throughout the
//! question-to-answer pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use campus_chat_error::{CampusChatResult, ConfigError, ConfigErrorKind};
//!
//! fn load_secret() -> CampusChatResult<String> {
//!     Err(ConfigError::new(ConfigErrorKind::MissingDbPassword))?
//! }
//!
//! match load_secret() {
//!     Ok(secret) => println!("Got: {}", secret),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod gemini;

pub use config::{ConfigError, ConfigErrorKind};
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{CampusChatError, CampusChatErrorKind, CampusChatResult};
pub use gemini::{GeminiError, GeminiErrorKind};
