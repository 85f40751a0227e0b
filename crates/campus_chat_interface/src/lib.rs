//! Trait definitions for the campus-chat pipeline.
//!
//! The pipeline talks to its two collaborators (the model service and the
//! campus database) exclusively through these traits, so tests can substitute
//! mocks without a network or a database.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ChatDriver, ScheduleGateway};
