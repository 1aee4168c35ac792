use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::models::{ConversationTurn, Message};
use crate::parsers::categorize::categorize_messages;
use crate::parsers::dedup::deduplicate_messages;
use crate::parsers::session::parse_session_file;
use crate::parsers::turns::build_conversation_turns;

/// Output of the full parse pipeline: the categorized message list and the
/// conversation turns built from it. Both are immutable once returned.
#[derive(Debug, Clone)]
pub struct ParsedSession {
    pub messages: Vec<Message>,
    pub turns: Vec<ConversationTurn>,
}

/// Parse one or more session files into conversation turns.
///
/// Each file is parsed independently; a file that cannot be read is logged
/// and skipped rather than aborting the rest. The combined message list is
/// deduplicated across all files (continuation files repeat events from the
/// main session, so per-file dedup would miss the primary target), then
/// categorized, then grouped into turns.
///
/// # Errors
///
/// Returns an error only when no file yielded a single parseable message --
/// an explicitly surfaced empty-result condition, distinct from the per-file
/// and per-line degradation above.
pub fn parse_session_files(paths: &[PathBuf]) -> Result<ParsedSession> {
    let mut all_messages = Vec::new();
    let mut files_failed = 0;

    for path in paths {
        match parse_session_file(path) {
            Ok(messages) => all_messages.extend(messages),
            Err(e) => {
                files_failed += 1;
                eprintln!("Warning: Failed to parse session file {}: {}", path.display(), e);
            }
        }
    }

    if all_messages.is_empty() {
        bail!(
            "No parseable messages found in {} session file(s) ({} unreadable)",
            paths.len(),
            files_failed
        );
    }

    let deduplicated = deduplicate_messages(all_messages);
    let messages = categorize_messages(deduplicated);
    let turns = build_conversation_turns(&messages);

    Ok(ParsedSession { messages, turns })
}
