//! Data models for Claude Code session logs.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`Message`] - One event line from a session JSONL file
//! - [`MessageContent`] / [`ContentBlock`] - The string-or-blocks content variant
//! - [`MessageCategory`] - Semantic label assigned by the categorizer
//! - [`ConversationTurn`] - One user prompt plus all responses to it
//! - [`SessionInfo`] - Discovered session file metadata
//!
//! Models use serde for JSON (de)serialization; polymorphic content shapes
//! are handled with untagged enums rather than ad hoc type inspection.

pub mod message;
pub mod session;
pub mod turn;

pub use message::{ContentBlock, Message, MessageCategory, MessageContent, Usage};
pub use session::SessionInfo;
pub use turn::ConversationTurn;
