//! cc-summarize - Condense Claude Code session logs into conversation turns
//!
//! This library parses the JSONL session logs Claude Code writes under
//! `~/.claude/projects/`, reconstructs them as user-anchored conversation
//! turns, and produces deterministic log-derived summaries. It supports:
//!
//! - Parsing raw JSONL session files into normalized messages
//! - Cross-file deduplication of resumed and continued sessions
//! - Semantic categorization (subagent echoes, plans, tool noise, summaries)
//! - Grouping messages into conversation turns with duration and token totals
//! - Extracting clean user prompts and compact tool-call listings
//!
//! # Example
//!
//! ```no_run
//! use cc_summarize::parse_session_files;
//! use std::path::PathBuf;
//!
//! let files = vec![PathBuf::from("/Users/alice/.claude/projects/-tmp-app/abc.jsonl")];
//! let parsed = parse_session_files(&files)?;
//! println!("{} turns from {} messages", parsed.turns.len(), parsed.messages.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod discovery;
pub mod models;
pub mod parsers;
pub mod summary;
pub mod utils;

// Re-export commonly used types
pub use models::{ConversationTurn, Message, MessageCategory, SessionInfo};
pub use parsers::{ParsedSession, parse_session_files};
pub use summary::{DetailLevel, LogSummarizer, Summarizer, extract_user_prompts};
pub use utils::format_path_with_tilde;
