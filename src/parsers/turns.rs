use crate::models::{ConversationTurn, Message, MessageCategory};

/// Group a categorized, chronologically ordered message sequence into
/// conversation turns.
///
/// A user-type message starts a new turn unless its category marks it as
/// tool_response, session_summary or system_noise -- those are absorbed and
/// dropped from turn construction entirely (they stay reachable through the
/// raw message list). Assistant and system messages attach to the turn in
/// progress; any other type lands in the turn's tool list. A trailing
/// in-progress turn is finalized at end of stream, and a stream with no
/// qualifying user message yields no turns.
pub fn build_conversation_turns(messages: &[Message]) -> Vec<ConversationTurn> {
    let mut turns = Vec::new();
    let mut current: Option<TurnInProgress> = None;

    for message in messages {
        match message.entry_type.as_str() {
            "user" => {
                if is_absorbed(message) {
                    continue;
                }
                if let Some(turn) = current.take() {
                    turns.push(turn.finalize());
                }
                current = Some(TurnInProgress::new(message.clone()));
            }
            "assistant" => {
                if let Some(turn) = current.as_mut() {
                    turn.assistant_messages.push(message.clone());
                }
            }
            "system" => {
                if let Some(turn) = current.as_mut() {
                    turn.system_messages.push(message.clone());
                }
            }
            _ => {
                if let Some(turn) = current.as_mut() {
                    turn.tool_messages.push(message.clone());
                }
            }
        }
    }

    if let Some(turn) = current.take() {
        turns.push(turn.finalize());
    }

    turns
}

/// User-type messages that never start (or close) a turn
fn is_absorbed(message: &Message) -> bool {
    matches!(
        message.category,
        Some(MessageCategory::ToolResponse)
            | Some(MessageCategory::SessionSummary)
            | Some(MessageCategory::SystemNoise)
    )
}

struct TurnInProgress {
    user_message: Message,
    assistant_messages: Vec<Message>,
    system_messages: Vec<Message>,
    tool_messages: Vec<Message>,
}

impl TurnInProgress {
    fn new(user_message: Message) -> Self {
        Self {
            user_message,
            assistant_messages: Vec::new(),
            system_messages: Vec::new(),
            tool_messages: Vec::new(),
        }
    }

    fn finalize(self) -> ConversationTurn {
        let duration_seconds = self.assistant_messages.last().map(|last| {
            let start = self.user_message.datetime();
            let end = last.datetime();
            (end - start).num_milliseconds() as f64 / 1000.0
        });

        let usages: Vec<_> =
            self.assistant_messages.iter().filter_map(|m| m.usage).collect();
        let total_tokens = if usages.is_empty() {
            None
        } else {
            Some(usages.iter().map(|u| u.total()).sum())
        };

        ConversationTurn {
            user_message: self.user_message,
            assistant_messages: self.assistant_messages,
            system_messages: self.system_messages,
            tool_messages: self.tool_messages,
            duration_seconds,
            total_tokens,
        }
    }
}
