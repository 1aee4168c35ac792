use serde::{Deserialize, Serialize};

use crate::models::Message;

/// One user prompt plus everything the assistant and system did in response,
/// up to (excluding) the next turn-starting user message.
///
/// Turns are built once from a finalized message sequence and are read-only
/// afterwards; downstream summarizers may iterate them freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// The turn's anchor
    pub user_message: Message,
    pub assistant_messages: Vec<Message>,
    pub system_messages: Vec<Message>,
    pub tool_messages: Vec<Message>,
    /// Timestamp of last assistant message minus the user message timestamp;
    /// `None` when the turn has no assistant messages
    pub duration_seconds: Option<f64>,
    /// Sum of all token counters across assistant messages; `None` when no
    /// assistant message carries usage data
    pub total_tokens: Option<u64>,
}
