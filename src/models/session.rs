use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lightweight metadata about one session file, cheap to compute without a
/// full parse (first record plus file stats).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// sessionId of the first record, or the file stem when unavailable
    pub session_id: String,
    pub file_path: PathBuf,
    /// Number of non-empty lines in the file
    pub message_count: usize,
    /// Raw timestamp of the first record, if present
    pub start_time: Option<String>,
    pub last_modified: DateTime<Utc>,
    pub file_size: u64,
}
