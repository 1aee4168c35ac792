use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Semantic label assigned to a message by the categorizer.
///
/// Raw session logs interleave genuine user prompts with tool results,
/// command noise, subagent delegation prompts and continuation summaries.
/// The category tells downstream consumers which is which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    User,
    Assistant,
    System,
    Plan,
    Subagent,
    ToolResponse,
    SessionSummary,
    SystemNoise,
    Other,
}

impl MessageCategory {
    /// Short uppercase label used in terminal output
    pub fn label(&self) -> &'static str {
        match self {
            MessageCategory::User => "USER",
            MessageCategory::Assistant => "ASSISTANT",
            MessageCategory::System => "SYSTEM",
            MessageCategory::Plan => "PLAN",
            MessageCategory::Subagent => "SUBAGENT",
            MessageCategory::ToolResponse => "TOOL",
            MessageCategory::SessionSummary => "SUMMARY",
            MessageCategory::SystemNoise => "NOISE",
            MessageCategory::Other => "OTHER",
        }
    }
}

/// One tagged unit within a structured message payload.
///
/// Unknown block types are preserved as raw JSON rather than rejected, since
/// session files regularly grow new block kinds (thinking, image, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: Value,
    },
    ToolResult {
        #[serde(default)]
        tool_use_id: String,
        #[serde(default)]
        content: Value,
    },
    #[serde(untagged)]
    Other(Value),
}

/// Message content: either plain text or an ordered list of content blocks.
///
/// Anything that is neither (bare objects, numbers) is kept as `Raw` so the
/// parser never has to reject a line over a content shape it doesn't know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Raw(Value),
}

impl MessageContent {
    /// Plain-string content, if that's what this is
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Content blocks, empty for non-list content
    pub fn blocks(&self) -> &[ContentBlock] {
        match self {
            MessageContent::Blocks(blocks) => blocks,
            _ => &[],
        }
    }

    /// True if any block in list content is a tool_result
    pub fn has_tool_result(&self) -> bool {
        self.blocks().iter().any(|b| matches!(b, ContentBlock::ToolResult { .. }))
    }

    /// First tool_use block in list content, if any
    pub fn first_tool_use(&self) -> Option<(&str, &Value)> {
        self.blocks().iter().find_map(|b| match b {
            ContentBlock::ToolUse { name, input, .. } => Some((name.as_str(), input)),
            _ => None,
        })
    }
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

/// Token accounting attached to assistant messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: u64,
    #[serde(default)]
    pub cache_read_input_tokens: u64,
}

impl Usage {
    /// Sum of all four token counters
    pub fn total(&self) -> u64 {
        self.input_tokens
            + self.output_tokens
            + self.cache_creation_input_tokens
            + self.cache_read_input_tokens
    }
}

/// One event line from a session JSONL file.
///
/// A `Message` is immutable once built by the line parser. Categorization
/// produces a new value via [`Message::with_category`] instead of mutating
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Original uuid, or `line_<n>` synthesized from the line number
    pub uuid: String,
    /// Back-reference to the parent event; informational only
    pub parent_uuid: Option<String>,
    /// Raw record type: `user`, `assistant`, `system`, `summary`, or anything else
    pub entry_type: String,
    /// Raw timestamp string as it appeared in the record
    pub timestamp: String,
    pub content: MessageContent,
    pub session_id: String,
    pub cwd: Option<String>,
    pub git_branch: Option<String>,
    /// Name of the first tool_use block in list content, if any
    pub tool_name: Option<String>,
    /// Input of the first tool_use block in list content, if any
    pub tool_args: Option<Value>,
    pub usage: Option<Usage>,
    /// Assigned by the categorizer; `None` until that pass runs
    pub category: Option<MessageCategory>,
}

impl Message {
    /// Parse the raw timestamp into a timezone-aware instant.
    ///
    /// Accepts RFC3339 (with or without `Z`), naive ISO-8601 (assumed UTC)
    /// and epoch milliseconds. Unparseable timestamps fall back to `now` so
    /// downstream sorting never fails; such messages sort as if recorded at
    /// parse time. This is a deliberate approximation, not silent data loss.
    pub fn datetime(&self) -> DateTime<Utc> {
        if let Ok(dt) = self.timestamp.parse::<DateTime<Utc>>() {
            return dt;
        }
        if let Ok(naive) = self.timestamp.parse::<NaiveDateTime>() {
            return naive.and_utc();
        }
        if let Ok(ms) = self.timestamp.parse::<i64>()
            && let Some(dt) = DateTime::from_timestamp_millis(ms)
        {
            return dt;
        }
        Utc::now()
    }

    /// Copy of this message carrying the given category
    pub fn with_category(mut self, category: MessageCategory) -> Self {
        self.category = Some(category);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_deserialize_plain_string() {
        let content: MessageContent = serde_json::from_str(r#""hello""#).unwrap();
        assert_eq!(content, MessageContent::Text("hello".to_string()));
        assert_eq!(content.as_text(), Some("hello"));
    }

    #[test]
    fn test_content_deserialize_blocks() {
        let json = r#"[{"type":"text","text":"hi"},{"type":"tool_use","id":"t1","name":"Edit","input":{"file_path":"a.py"}}]"#;
        let content: MessageContent = serde_json::from_str(json).unwrap();
        let blocks = content.blocks();
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], ContentBlock::Text { text } if text == "hi"));
        let (name, input) = content.first_tool_use().unwrap();
        assert_eq!(name, "Edit");
        assert_eq!(input["file_path"], "a.py");
    }

    #[test]
    fn test_content_unknown_block_kept_raw() {
        let json = r#"[{"type":"thinking","thinking":"hmm"}]"#;
        let content: MessageContent = serde_json::from_str(json).unwrap();
        assert!(matches!(&content.blocks()[0], ContentBlock::Other(_)));
        assert!(!content.has_tool_result());
    }

    #[test]
    fn test_content_tool_result_detection() {
        let json = r#"[{"type":"tool_result","tool_use_id":"t1","content":"ok"}]"#;
        let content: MessageContent = serde_json::from_str(json).unwrap();
        assert!(content.has_tool_result());
    }

    #[test]
    fn test_usage_total() {
        let usage = Usage {
            input_tokens: 10,
            output_tokens: 5,
            cache_creation_input_tokens: 0,
            cache_read_input_tokens: 0,
        };
        assert_eq!(usage.total(), 15);
    }

    #[test]
    fn test_usage_missing_counters_default_to_zero() {
        let usage: Usage = serde_json::from_str(r#"{"output_tokens":7}"#).unwrap();
        assert_eq!(usage.total(), 7);
    }

    fn message_with_timestamp(ts: &str) -> Message {
        Message {
            uuid: "u1".to_string(),
            parent_uuid: None,
            entry_type: "user".to_string(),
            timestamp: ts.to_string(),
            content: MessageContent::default(),
            session_id: String::new(),
            cwd: None,
            git_branch: None,
            tool_name: None,
            tool_args: None,
            usage: None,
            category: None,
        }
    }

    #[test]
    fn test_datetime_rfc3339_with_z() {
        let msg = message_with_timestamp("2024-01-15T10:30:00Z");
        assert_eq!(msg.datetime().to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_datetime_naive_assumed_utc() {
        let msg = message_with_timestamp("2024-01-15T10:30:00");
        assert_eq!(msg.datetime().to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_datetime_epoch_millis() {
        let msg = message_with_timestamp("1705314600000");
        assert_eq!(msg.datetime(), DateTime::from_timestamp_millis(1705314600000).unwrap());
    }

    #[test]
    fn test_datetime_garbage_falls_back_to_now() {
        let before = Utc::now();
        let msg = message_with_timestamp("not a timestamp");
        let parsed = msg.datetime();
        let after = Utc::now();
        assert!(parsed >= before && parsed <= after);
    }

    #[test]
    fn test_with_category_leaves_original_untouched() {
        let msg = message_with_timestamp("2024-01-15T10:30:00Z");
        let copy = msg.clone().with_category(MessageCategory::User);
        assert_eq!(msg.category, None);
        assert_eq!(copy.category, Some(MessageCategory::User));
    }
}
