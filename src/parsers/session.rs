use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{Message, MessageContent, Usage};
use crate::utils::validate_file_size;

/// Parse one session JSONL file into messages, sorted by timestamp ascending.
///
/// Gracefully handles malformed lines: invalid JSON is logged with its line
/// number and skipped, and parsing of the rest of the file continues. A single
/// corrupt line never aborts the file. Blank lines are skipped silently.
pub fn parse_session_file(path: &Path) -> Result<Vec<Message>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open session file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    let mut messages = Vec::new();
    let mut skipped_count = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.context("Failed to read line from session file")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(raw) => messages.push(parse_record(&raw, line_num)),
            Err(e) => {
                eprintln!(
                    "Warning: Invalid JSON on line {} in {}: {}",
                    line_num,
                    path.display(),
                    e
                );
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        eprintln!(
            "Parsed {}: {} messages ({} lines skipped)",
            path.display(),
            messages.len(),
            skipped_count
        );
    }

    // Chronological order. The key is cached so messages with unparseable
    // timestamps get one consistent "now" for the whole sort.
    messages.sort_by_cached_key(|m| m.datetime());

    Ok(messages)
}

/// Build a [`Message`] from one raw JSON record.
///
/// Extraction is total: missing or oddly shaped fields default rather than
/// fail. Where content lives depends on the record type -- `user` and
/// `assistant` nest it under `message` (assistant also carries `usage`
/// there), `system` has top-level `content`, `summary` has a `summary`
/// string, and unknown types fall back to `content` then `message`.
pub fn parse_record(raw: &Value, line_num: usize) -> Message {
    let entry_type = raw.get("type").and_then(Value::as_str).unwrap_or("unknown").to_string();
    let uuid = raw
        .get("uuid")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("line_{}", line_num));
    let parent_uuid = raw.get("parentUuid").and_then(Value::as_str).map(str::to_string);
    let timestamp = timestamp_string(raw.get("timestamp"));
    let session_id =
        raw.get("sessionId").and_then(Value::as_str).unwrap_or_default().to_string();
    let cwd = raw.get("cwd").and_then(Value::as_str).map(str::to_string);
    let git_branch = raw.get("gitBranch").and_then(Value::as_str).map(str::to_string);

    let mut usage = None;
    let content_value = match entry_type.as_str() {
        "user" => raw.get("message").and_then(|m| m.get("content")).cloned(),
        "assistant" => {
            let message = raw.get("message");
            usage = message
                .and_then(|m| m.get("usage"))
                .and_then(|u| serde_json::from_value::<Usage>(u.clone()).ok());
            message.and_then(|m| m.get("content")).cloned()
        }
        "system" => raw.get("content").cloned(),
        "summary" => raw.get("summary").cloned(),
        _ => raw.get("content").or_else(|| raw.get("message")).cloned(),
    };
    let content = content_value.map(content_from_value).unwrap_or_default();

    // Only the first tool_use block counts: a message has at most one
    // "primary" tool call in this model.
    let (tool_name, tool_args) = match content.first_tool_use() {
        Some((name, input)) => (Some(name.to_string()), Some(input.clone())),
        None => (None, None),
    };

    Message {
        uuid,
        parent_uuid,
        entry_type,
        timestamp,
        content,
        session_id,
        cwd,
        git_branch,
        tool_name,
        tool_args,
        usage,
        category: None,
    }
}

fn content_from_value(value: Value) -> MessageContent {
    // The untagged MessageContent has a Raw catch-all, so this only fails on
    // pathological values; default to empty text in that case.
    serde_json::from_value(value).unwrap_or_default()
}

fn timestamp_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
