use std::path::Path;

use serde_json::Value;

use crate::models::Message;
use crate::summary::DetailLevel;

/// File-operation tools grouped per file in compacted output
const FILE_TOOLS: [&str; 4] = ["Read", "Edit", "MultiEdit", "Write"];

/// Display order for grouped file operations
const OP_ORDER: [&str; 4] = ["Read", "Edit", "MultiEdit", "Write"];

/// Compact tool calls into short human-readable descriptions.
///
/// `Detailed` lists every call with an argument summary. `Normal` groups
/// Read/Edit/MultiEdit/Write by file path ("Read + Edit: main.rs") and keeps
/// deduplicated Bash/Grep/Glob lines plus Task dispatches. `Minimal` keeps
/// only file operations and Bash commands.
pub fn compact_tool_calls(messages: &[Message], detail: DetailLevel) -> Vec<String> {
    if detail == DetailLevel::Detailed {
        return messages
            .iter()
            .filter_map(|msg| {
                let name = msg.tool_name.as_deref()?;
                let args = msg.tool_args.as_ref();
                let summary = args.map(|a| summarize_tool_args(name, a)).unwrap_or_default();
                if summary.is_empty() {
                    Some(name.to_string())
                } else {
                    Some(format!("{}: {}", name, summary))
                }
            })
            .collect();
    }

    // path -> operations seen, insertion-ordered
    let mut file_ops: Vec<(String, Vec<String>)> = Vec::new();
    let mut other_tools: Vec<String> = Vec::new();

    for msg in messages {
        let Some(name) = msg.tool_name.as_deref() else {
            continue;
        };
        let args = msg.tool_args.clone().unwrap_or(Value::Null);

        if FILE_TOOLS.contains(&name) {
            let file_path = str_arg(&args, "file_path");
            if file_path.is_empty() {
                continue;
            }
            match file_ops.iter_mut().find(|(path, _)| *path == file_path) {
                Some((_, ops)) => {
                    if !ops.iter().any(|op| op == name) {
                        ops.push(name.to_string());
                    }
                }
                None => file_ops.push((file_path, vec![name.to_string()])),
            }
        } else if detail == DetailLevel::Minimal {
            if name == "Bash" {
                let desc = str_arg(&args, "description");
                let cmd = char_slice(&str_arg(&args, "command"), 50);
                other_tools.push(format!("Bash: {}", if desc.is_empty() { cmd } else { desc }));
            }
        } else {
            match name {
                "Bash" => {
                    let desc = str_arg(&args, "description");
                    let cmd = char_slice(&str_arg(&args, "command"), 50);
                    let line =
                        format!("Bash: {}", if desc.is_empty() { cmd } else { desc });
                    if !other_tools.contains(&line) {
                        other_tools.push(line);
                    }
                }
                "Grep" | "Glob" => {
                    let line = format!("{}: {}", name, str_arg(&args, "pattern"));
                    if !other_tools.contains(&line) {
                        other_tools.push(line);
                    }
                }
                "Task" => {
                    other_tools.push(format!("Task: {}", str_arg(&args, "description")));
                }
                _ => {}
            }
        }
    }

    let mut result = Vec::new();
    for (file_path, mut ops) in file_ops {
        ops.sort_by_key(|op| {
            OP_ORDER.iter().position(|known| known == op).unwrap_or(OP_ORDER.len())
        });
        let display_path = file_name(&file_path);
        result.push(format!("{}: {}", ops.join(" + "), display_path));
    }
    result.extend(other_tools);
    result
}

/// Brief summary of one tool's arguments for detailed output
pub fn summarize_tool_args(tool_name: &str, args: &Value) -> String {
    match tool_name {
        "Edit" => {
            let filename = file_name(&str_arg(args, "file_path"));
            let edit = summarize_edit(&str_arg(args, "old_string"), &str_arg(args, "new_string"));
            format!("{} ({})", filename, edit)
        }
        "MultiEdit" => {
            let filename = file_name(&str_arg(args, "file_path"));
            let edits = args.get("edits").and_then(Value::as_array).map(Vec::len).unwrap_or(0);
            format!("{} ({} edits)", filename, edits)
        }
        "Write" => {
            let filename = file_name(&str_arg(args, "file_path"));
            let content = str_arg(args, "content");
            let lines = if content.is_empty() { 0 } else { content.split('\n').count() };
            format!("{} ({} lines)", filename, lines)
        }
        "Read" => file_name(&str_arg(args, "file_path")),
        "Bash" => {
            let desc = str_arg(args, "description");
            if desc.is_empty() { char_slice(&str_arg(args, "command"), 80) } else { desc }
        }
        "Grep" | "Glob" => str_arg(args, "pattern"),
        "Task" => str_arg(args, "description"),
        _ => String::new(),
    }
}

/// One-liner describing what an edit did
fn summarize_edit(old_string: &str, new_string: &str) -> String {
    if old_string.is_empty() && !new_string.is_empty() {
        let trimmed = new_string.trim();
        let lines: Vec<&str> = trimmed.split('\n').collect();
        if lines.len() == 1 {
            let preview = char_slice(lines[0], 40);
            return if lines[0].chars().count() > 40 {
                format!("added: {}...", preview)
            } else {
                format!("added: {}", preview)
            };
        }
        return format!("added {} lines", lines.len());
    }

    if !old_string.is_empty() && new_string.is_empty() {
        let lines = old_string.trim().split('\n').count();
        if lines == 1 {
            return "deleted line".to_string();
        }
        return format!("deleted {} lines", lines);
    }

    if !old_string.is_empty() && !new_string.is_empty() {
        let old_lines: Vec<&str> = old_string.split('\n').collect();
        let new_lines: Vec<&str> = new_string.split('\n').collect();

        if old_lines.len() == 1 && new_lines.len() == 1 {
            let old = old_string.trim();
            let new = new_string.trim();
            if old.contains("fn ") && new.contains("fn ") {
                return "renamed function".to_string();
            }
            if old.contains("struct ") && new.contains("struct ") {
                return "renamed struct".to_string();
            }
            if old.contains("use ") && new.contains("use ") {
                return "changed import".to_string();
            }
            return "changed line".to_string();
        }

        let diff = new_lines.len() as i64 - old_lines.len() as i64;
        if diff > 0 {
            return format!("expanded (+{} lines)", diff);
        } else if diff < 0 {
            return format!("reduced ({} lines)", diff);
        }
        return format!("modified {} lines", old_lines.len());
    }

    "modified".to_string()
}

fn str_arg(args: &Value, key: &str) -> String {
    args.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn char_slice(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
