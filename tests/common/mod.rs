//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given encoded name and session files
    pub fn with_project(self, encoded_name: &str, sessions: &[SessionFileBuilder]) -> Self {
        let projects_dir = self.temp_dir.path().join("projects");
        fs::create_dir_all(&projects_dir).expect("Failed to create projects dir");

        let project_dir = projects_dir.join(encoded_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session in sessions {
            session.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a session .jsonl file
pub struct SessionFileBuilder {
    file_name: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a new session file named `<session_id>.jsonl`
    pub fn new(session_id: &str) -> Self {
        Self { file_name: format!("{session_id}.jsonl"), lines: Vec::new() }
    }

    /// Append a message line
    pub fn line(mut self, message: MessageLineBuilder) -> Self {
        self.lines.push(message.to_json());
        self
    }

    /// Append a raw line verbatim (for malformed-input tests)
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write the file into the given project directory
    pub fn create_in(&self, project_dir: &Path) -> PathBuf {
        let path = project_dir.join(&self.file_name);
        let mut file = fs::File::create(&path).expect("Failed to create session file");
        for line in &self.lines {
            writeln!(file, "{line}").expect("Failed to write session line");
        }
        path
    }
}

/// Builder for individual JSONL message records
pub struct MessageLineBuilder {
    record: Value,
}

impl MessageLineBuilder {
    /// A user message with plain-string content
    pub fn user(uuid: &str, text: &str) -> Self {
        Self {
            record: json!({
                "type": "user",
                "uuid": uuid,
                "timestamp": "2024-01-15T10:00:00Z",
                "sessionId": "550e8400-e29b-41d4-a716-446655440000",
                "message": {"content": text},
            }),
        }
    }

    /// An assistant message with a single text block
    pub fn assistant(uuid: &str, text: &str) -> Self {
        Self {
            record: json!({
                "type": "assistant",
                "uuid": uuid,
                "timestamp": "2024-01-15T10:00:30Z",
                "sessionId": "550e8400-e29b-41d4-a716-446655440000",
                "message": {"content": [{"type": "text", "text": text}]},
            }),
        }
    }

    /// An assistant message dispatching a tool call
    pub fn tool_use(uuid: &str, tool_name: &str, input: Value) -> Self {
        Self {
            record: json!({
                "type": "assistant",
                "uuid": uuid,
                "timestamp": "2024-01-15T10:00:30Z",
                "sessionId": "550e8400-e29b-41d4-a716-446655440000",
                "message": {"content": [
                    {"type": "tool_use", "id": "toolu_01", "name": tool_name, "input": input}
                ]},
            }),
        }
    }

    /// A user message carrying a tool_result block
    pub fn tool_result(uuid: &str, output: &str) -> Self {
        Self {
            record: json!({
                "type": "user",
                "uuid": uuid,
                "timestamp": "2024-01-15T10:00:40Z",
                "sessionId": "550e8400-e29b-41d4-a716-446655440000",
                "message": {"content": [
                    {"type": "tool_result", "tool_use_id": "toolu_01", "content": output}
                ]},
            }),
        }
    }

    /// A system message
    pub fn system(uuid: &str, text: &str) -> Self {
        Self {
            record: json!({
                "type": "system",
                "uuid": uuid,
                "timestamp": "2024-01-15T10:00:50Z",
                "sessionId": "550e8400-e29b-41d4-a716-446655440000",
                "content": text,
            }),
        }
    }

    /// A summary record
    pub fn summary(text: &str) -> Self {
        Self { record: json!({"type": "summary", "summary": text}) }
    }

    /// Override the timestamp
    pub fn timestamp(mut self, ts: &str) -> Self {
        self.record["timestamp"] = json!(ts);
        self
    }

    /// Override the session id
    pub fn session_id(mut self, session_id: &str) -> Self {
        self.record["sessionId"] = json!(session_id);
        self
    }

    /// Attach usage counters to an assistant record
    pub fn usage(mut self, input_tokens: u64, output_tokens: u64) -> Self {
        self.record["message"]["usage"] =
            json!({"input_tokens": input_tokens, "output_tokens": output_tokens});
        self
    }

    /// Drop the uuid field (for synthesized-uuid tests)
    pub fn without_uuid(mut self) -> Self {
        if let Some(obj) = self.record.as_object_mut() {
            obj.remove("uuid");
        }
        self
    }

    /// Set an arbitrary top-level field
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.record[key] = value;
        self
    }

    /// Convert to a JSONL line
    pub fn to_json(&self) -> String {
        self.record.to_string()
    }
}
