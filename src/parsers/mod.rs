//! Session JSONL parsing: line parser, deduplicator, categorizer, turn
//! builder and the multi-file pipeline composing them.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for
//! semi-structured external log data:
//!
//! - **Individual line failures**: Malformed JSON lines are logged to stderr
//!   with their line number and skipped; a single corrupt line never aborts
//!   the file.
//!
//! - **File failures**: An unreadable file is logged and skipped by the
//!   multi-file pipeline; remaining files are still processed.
//!
//! - **Modeled states, not errors**: A missing timestamp sorts as "now", an
//!   unrecognized record type categorizes as `other`. Data-quality issues
//!   always produce a best-effort result instead of an error.
//!
//! - **Error propagation**: `anyhow::Result` with context at the I/O
//!   boundary. The only pipeline-level error is the explicit empty-result
//!   condition when no file yields a single parseable message.

pub mod categorize;
pub mod dedup;
pub mod pipeline;
pub mod session;
pub mod turns;

pub use categorize::{categorize_messages, collect_task_prompts};
pub use dedup::deduplicate_messages;
pub use pipeline::{ParsedSession, parse_session_files};
pub use session::parse_session_file;
pub use turns::build_conversation_turns;
