//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Roles of the two instruction parts sent to the model, plus the model itself.
///
/// # Examples
///
/// ```
/// use campus_chat_core::Role;
///
/// assert_ne!(Role::User, Role::System);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the AI
    Assistant,
}
