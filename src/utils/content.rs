use crate::models::{ContentBlock, MessageContent};

/// Extract clean display text from user message content.
///
/// Plain strings are stripped of session-start-hook tags; list content joins
/// text blocks with newlines and drops tool results (noise in user display).
/// Unknown blocks and raw content fall back to their JSON form.
pub fn extract_user_content(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text
            .replace("<session-start-hook>", "")
            .replace("</session-start-hook>", "")
            .trim()
            .to_string(),
        MessageContent::Blocks(blocks) => {
            let parts: Vec<String> = blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.clone()),
                    ContentBlock::ToolResult { .. } => None,
                    ContentBlock::ToolUse { .. } => None,
                    ContentBlock::Other(value) => Some(value.to_string()),
                })
                .collect();
            parts.join("\n").trim().to_string()
        }
        MessageContent::Raw(value) => value.to_string(),
    }
}

/// Extract only text content, ignoring tool calls, tool results and unknown
/// blocks entirely.
pub fn extract_text(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.trim().to_string(),
        MessageContent::Blocks(blocks) => {
            let parts: Vec<&str> = blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            parts.join("\n").trim().to_string()
        }
        MessageContent::Raw(_) => String::new(),
    }
}

/// Truncate to `max_chars` characters, appending `...` when cut.
/// Character-based so multi-byte text never splits a code point.
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    const SUFFIX: &str = "...";
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let keep = max_chars.saturating_sub(SUFFIX.len());
    let mut truncated: String = content.chars().take(keep).collect();
    truncated.push_str(SUFFIX);
    truncated
}
