//! Question-to-answer orchestration for campus-chat.
//!
//! The pipeline runs three steps in sequence for each question:
//!
//! 1. **Query synthesis** - the question plus the schema descriptor and static
//!    domain knowledge go to a deterministic model that emits one SQL query as
//!    structured output.
//! 2. **Query execution** - the query runs against the schedule database; an
//!    execution failure becomes a textual pseudo-result instead of an error.
//! 3. **Answer synthesis** - question, query and result go to a second model
//!    that phrases the final answer.
//!
//! Any step's failure is mapped by the classifier to a fixed set of
//! user-facing message/code pairs; [`Pipeline::ask`] never returns an error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod extraction;
mod pipeline;
pub mod prompts;

pub use classify::{ClassifiedError, ErrorCode, classify, classify_details};
pub use extraction::parse_query_output;
pub use pipeline::{ChatOutcome, Pipeline, QUERY_TEMPERATURE, REPLY_TEMPERATURE};
