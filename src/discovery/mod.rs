//! Session discovery for Claude Code projects.
//!
//! Session logs live under `~/.claude/projects/<hyphenated-project-path>/`,
//! one `.jsonl` file per session. Functions here locate those files, extract
//! cheap per-session metadata and resolve session ids (full or prefix) to
//! file paths. All functions take the `.claude` directory explicitly so
//! callers and tests control the lookup root.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::SessionInfo;

/// Convert a project path to Claude Code's hyphenated directory name.
///
/// Example: `/home/user/projects/my-app` -> `-home-user-projects-my-app`
pub fn project_dir_name(project_path: &Path) -> String {
    project_path.to_string_lossy().replace('/', "-")
}

/// Find all session files for a project, newest modification time first.
///
/// Returns an empty list when the project has no directory yet; a missing
/// `projects` directory under `.claude` is an error (Claude Code has never
/// run on this machine).
pub fn find_session_files(claude_dir: &Path, project_path: &Path) -> Result<Vec<PathBuf>> {
    let projects_dir = claude_dir.join("projects");
    if !projects_dir.exists() {
        bail!(
            "Claude Code projects directory not found at {}. \
             Make sure Claude Code has been used at least once.",
            projects_dir.display()
        );
    }

    let resolved =
        project_path.canonicalize().unwrap_or_else(|_| project_path.to_path_buf());
    let project_dir = projects_dir.join(project_dir_name(&resolved));
    if !project_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&project_dir)
        .with_context(|| format!("Failed to read project directory: {}", project_dir.display()))?;

    let mut files: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        files.push((path, modified));
    }

    files.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(files.into_iter().map(|(path, _)| path).collect())
}

/// Extract basic metadata from a session file without a full parse.
///
/// Reads the first line for the session id and start timestamp, then counts
/// the remaining non-empty lines.
pub fn session_metadata(path: &Path) -> Result<SessionInfo> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open session file: {}", path.display()))?;
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let stem = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();

    let mut session_id = stem.clone();
    let mut start_time = None;
    let mut message_count = 0;

    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line.context("Failed to read line from session file")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if message_count == 0
            && let Ok(first) = serde_json::from_str::<Value>(line)
        {
            if let Some(id) = first.get("sessionId").and_then(Value::as_str) {
                session_id = id.to_string();
            }
            start_time =
                first.get("timestamp").and_then(Value::as_str).map(str::to_string);
        }
        message_count += 1;
    }

    let last_modified: DateTime<Utc> =
        metadata.modified().map(DateTime::from).unwrap_or_else(|_| Utc::now());

    Ok(SessionInfo {
        session_id,
        file_path: path.to_path_buf(),
        message_count,
        start_time,
        last_modified,
        file_size: metadata.len(),
    })
}

/// List sessions for a project with optional limit, newest first.
///
/// Files whose metadata cannot be read are logged and skipped.
pub fn list_sessions(
    claude_dir: &Path,
    project_path: &Path,
    limit: Option<usize>,
) -> Result<Vec<SessionInfo>> {
    let files = find_session_files(claude_dir, project_path)?;

    let mut sessions = Vec::new();
    for file in files {
        match session_metadata(&file) {
            Ok(info) => sessions.push(info),
            Err(e) => {
                eprintln!("Warning: Skipping session file {}: {}", file.display(), e);
            }
        }
    }

    if let Some(limit) = limit {
        sessions.truncate(limit);
    }
    Ok(sessions)
}

/// Find a session file by id, supporting prefix matches.
///
/// An exact file-stem match wins; otherwise the most recently modified
/// session whose stem starts with `session_id` is returned.
pub fn find_session_by_id(
    claude_dir: &Path,
    project_path: &Path,
    session_id: &str,
) -> Result<Option<PathBuf>> {
    let files = find_session_files(claude_dir, project_path)?;

    let mut prefix_match = None;
    for file in &files {
        let stem = file.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        if stem == session_id {
            return Ok(Some(file.clone()));
        }
        if prefix_match.is_none() && stem.starts_with(session_id) {
            // Files are sorted newest first, so the first prefix hit is the
            // most recent one.
            prefix_match = Some(file.clone());
        }
    }

    Ok(prefix_match)
}
