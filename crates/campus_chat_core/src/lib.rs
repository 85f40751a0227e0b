//! Core data types for the campus-chat pipeline.
//!
//! This crate provides the foundation data types shared by the model clients,
//! the database gateway and the pipeline orchestrator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod query_output;
mod request;
mod role;
mod session;

pub use message::Message;
pub use query_output::QueryOutput;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use session::Session;
