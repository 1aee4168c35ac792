//! Turn summarization seam.
//!
//! The parsing core hands immutable [`ConversationTurn`]s to summarizers.
//! [`Summarizer`] is the boundary trait: implementations must be
//! deterministic for a given turn so external caches keyed on (session,
//! content, detail level) stay stable across runs. [`LogSummarizer`] is the
//! built-in implementation that only extracts what the logs already contain;
//! AI-backed implementations live behind the same trait, outside this crate's
//! concern.

pub mod extract;
pub mod extractive;
pub mod tools;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::ConversationTurn;

pub use extract::{UserPrompt, extract_user_prompts};
pub use extractive::LogSummarizer;
pub use tools::compact_tool_calls;

/// How much detail a summary should carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Minimal,
    #[default]
    Normal,
    Detailed,
}

/// Result of summarizing one conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub summary: String,
    pub tool_calls: Vec<String>,
    pub tokens_used: Option<u64>,
    pub error: Option<String>,
}

/// Boundary contract for turn summarization.
///
/// Implementations receive read-only turns and must produce the same output
/// for the same (turn, detail, session) triple.
pub trait Summarizer {
    fn summarize_turn(
        &self,
        turn: &ConversationTurn,
        detail: DetailLevel,
        session_id: &str,
    ) -> TurnSummary;
}
