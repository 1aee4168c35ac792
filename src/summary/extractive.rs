use crate::models::{ConversationTurn, Message};
use crate::summary::tools::compact_tool_calls;
use crate::summary::{DetailLevel, Summarizer, TurnSummary};
use crate::utils::truncate_content;

/// Terms in system messages that indicate task-tracking activity
const TODO_INDICATORS: [&str; 10] = [
    "todowrite",
    "todo",
    "task",
    "working on",
    "implementing",
    "starting",
    "completing",
    "finished",
    "adding",
    "creating",
];

/// Summarizer that extracts what the logs already contain -- inline summary
/// records, todo-tracking activity and tool calls -- without any external AI
/// call. Output is fully deterministic for a given turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSummarizer;

impl Summarizer for LogSummarizer {
    fn summarize_turn(
        &self,
        turn: &ConversationTurn,
        detail: DetailLevel,
        _session_id: &str,
    ) -> TurnSummary {
        let mut summary_parts: Vec<String> = Vec::new();

        // Inline summary records attached to this turn
        for msg in turn.assistant_messages.iter().chain(turn.system_messages.iter()) {
            if msg.entry_type == "summary"
                && let Some(text) = msg.content.as_text()
                && !text.is_empty()
            {
                summary_parts.push(text.to_string());
            }
        }

        let todo_activities: Vec<String> = turn
            .system_messages
            .iter()
            .filter(|msg| is_todo_activity(msg))
            .map(extract_todo_content)
            .collect();
        if !todo_activities.is_empty() {
            if !summary_parts.is_empty() {
                summary_parts.push("Activities:".to_string());
            }
            summary_parts.extend(todo_activities);
        }

        let tool_calls = compact_tool_calls(&turn.assistant_messages, detail);

        if summary_parts.is_empty() && !tool_calls.is_empty() {
            let names: Vec<&str> = turn
                .assistant_messages
                .iter()
                .filter_map(|m| m.tool_name.as_deref())
                .take(5)
                .collect();
            summary_parts.push(format!("Used tools: {}", names.join(", ")));
        }

        let summary = if summary_parts.is_empty() {
            "No summary information available in logs.".to_string()
        } else {
            summary_parts.join("\n")
        };

        TurnSummary { summary, tool_calls, tokens_used: None, error: None }
    }
}

fn is_todo_activity(msg: &Message) -> bool {
    let Some(text) = msg.content.as_text() else {
        return false;
    };
    let lower = text.to_lowercase();
    !lower.is_empty() && TODO_INDICATORS.iter().any(|indicator| lower.contains(indicator))
}

fn extract_todo_content(msg: &Message) -> String {
    let content = msg.content.as_text().unwrap_or_default();
    let lower = content.to_lowercase();

    if lower.contains("todowrite") {
        "Updated todo list with current tasks".to_string()
    } else if lower.contains("completed successfully") {
        "Completed task successfully".to_string()
    } else if lower.contains("running") && lower.contains("tool") {
        "Executing tools and commands".to_string()
    } else {
        truncate_content(content.trim(), 100)
    }
}
