use std::collections::HashSet;

use crate::models::{ContentBlock, Message, MessageCategory};
use crate::utils::extract_text;

/// How many leading characters of a Task prompt are recorded for subagent
/// matching. A heuristic carried over from observed log behavior; long enough
/// that unrelated prompts rarely share a full prefix.
pub const SUBAGENT_PREFIX_CHARS: usize = 150;

/// Minimum text length for the continuation-summary check. Short messages
/// merely mentioning the phrase stay categorized as user input.
pub const SESSION_SUMMARY_MIN_CHARS: usize = 1000;

/// Phrases (lowercase) that mark an assistant message as a plan announcement
const PLAN_PHRASES: [&str; 6] =
    ["## plan", "# plan", "implementation plan", "## comprehensive", "## step", "### step"];

const SESSION_CONTINUATION_PREFIX: &str = "this session is being continued";

/// Pass 1: collect the prefixes of every Task tool prompt dispatched by
/// assistant messages.
///
/// Subagent prompts come back into the log as ordinary user messages, so
/// labeling them requires global knowledge of all Task invocations before any
/// user message can be categorized. The returned set is passed explicitly to
/// [`categorize_messages`].
pub fn collect_task_prompts(messages: &[Message]) -> HashSet<String> {
    let mut prompts = HashSet::new();

    for message in messages {
        if message.entry_type != "assistant" {
            continue;
        }
        for block in message.content.blocks() {
            if let ContentBlock::ToolUse { name, input, .. } = block
                && name.eq_ignore_ascii_case("task")
                && let Some(prompt) = input.get("prompt").and_then(|p| p.as_str())
                && !prompt.is_empty()
            {
                prompts.insert(char_prefix(prompt, SUBAGENT_PREFIX_CHARS));
            }
        }
    }

    prompts
}

/// Pass 2: return a new message list where every message carries a category.
///
/// Composes [`collect_task_prompts`] with the per-message rules; input
/// messages are not mutated.
pub fn categorize_messages(messages: Vec<Message>) -> Vec<Message> {
    let task_prompts = collect_task_prompts(&messages);
    messages
        .into_iter()
        .map(|msg| {
            let category = determine_category(&msg, &task_prompts);
            msg.with_category(category)
        })
        .collect()
}

/// Apply the categorization rules in order; first match wins.
///
/// The ordering is load-bearing: tool_response is checked before the
/// plain-string rules (session_summary, system_noise, subagent), which would
/// otherwise misfire on list-typed tool-result payloads.
pub fn determine_category(message: &Message, task_prompts: &HashSet<String>) -> MessageCategory {
    let is_user = message.entry_type == "user";

    // Tool results echoed back as user messages
    if is_user && message.content.has_tool_result() {
        return MessageCategory::ToolResponse;
    }

    // Long system-generated continuation summaries
    if is_user {
        let text = extract_text(&message.content);
        if text.to_lowercase().starts_with(SESSION_CONTINUATION_PREFIX)
            && text.chars().count() > SESSION_SUMMARY_MIN_CHARS
        {
            return MessageCategory::SessionSummary;
        }
    }

    if is_user && let Some(text) = message.content.as_text() {
        // Slash-command plumbing and similar noise
        if text.starts_with("<command-")
            || text.starts_with("<local-command-")
            || text.contains("command-message")
        {
            return MessageCategory::SystemNoise;
        }

        // User messages that echo a dispatched Task prompt
        if task_prompts.contains(&char_prefix(text, SUBAGENT_PREFIX_CHARS)) {
            return MessageCategory::Subagent;
        }
    }

    // Assistant messages announcing a plan
    if message.entry_type == "assistant" {
        for block in message.content.blocks() {
            match block {
                ContentBlock::Text { text } => {
                    let lower = text.to_lowercase();
                    if PLAN_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
                        return MessageCategory::Plan;
                    }
                }
                ContentBlock::ToolUse { name, .. } if name == "ExitPlanMode" => {
                    return MessageCategory::Plan;
                }
                _ => {}
            }
        }
    }

    match message.entry_type.as_str() {
        "user" => MessageCategory::User,
        "assistant" => MessageCategory::Assistant,
        "system" => MessageCategory::System,
        "summary" => MessageCategory::SessionSummary,
        _ => MessageCategory::Other,
    }
}

/// First `n` characters of a string (character-based, so multi-byte text
/// never splits a code point)
fn char_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
