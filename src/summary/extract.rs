use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{ConversationTurn, MessageCategory};
use crate::parsers::dedup::hash_content;
use crate::utils::extract_user_content;

/// Minimum characters for an extracted prompt to count as real input
const MIN_PROMPT_CHARS: usize = 5;

/// One genuine user prompt pulled out of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPrompt {
    pub turn_number: usize,
    pub timestamp: String,
    pub content: String,
    pub uuid: String,
    pub cwd: Option<String>,
    pub git_branch: Option<String>,
}

/// Extract clean user prompts from turns, numbered sequentially.
///
/// Only turns anchored by a genuinely user-categorized message qualify;
/// subagent echoes, plans and absorbed noise never reach the turn anchor in
/// the first place or are filtered here by category. Near-empty prompts are
/// dropped, and a final content-hash pass removes repeats that survived
/// message-level deduplication (e.g. the same prompt retyped).
pub fn extract_user_prompts(turns: &[ConversationTurn]) -> Vec<UserPrompt> {
    let mut seen_hashes: HashSet<String> = HashSet::new();
    let mut prompts = Vec::new();

    for turn in turns {
        let anchor = &turn.user_message;
        if anchor.category != Some(MessageCategory::User) {
            continue;
        }

        let content = extract_user_content(&anchor.content);
        if content.chars().count() < MIN_PROMPT_CHARS {
            continue;
        }

        if !seen_hashes.insert(hash_content(&anchor.content)) {
            continue;
        }

        prompts.push(UserPrompt {
            turn_number: prompts.len() + 1,
            timestamp: anchor.timestamp.clone(),
            content,
            uuid: anchor.uuid.clone(),
            cwd: anchor.cwd.clone(),
            git_branch: anchor.git_branch.clone(),
        });
    }

    prompts
}
