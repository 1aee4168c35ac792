use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::models::{Message, MessageContent};

/// Hex digest length kept for content hashes. 16 hex chars (64 bits) is
/// plenty of entropy at session scale (hundreds to low thousands of
/// messages); the residual collision risk is accepted.
const CONTENT_HASH_LEN: usize = 16;

/// Stable short hash of message content, used as the duplicate fallback key.
///
/// Plain text is hashed directly; structured content is serialized first
/// (serde_json object keys are sorted, so the serialization is
/// deterministic).
pub fn hash_content(content: &MessageContent) -> String {
    let mut hasher = Sha256::new();
    match content.as_text() {
        Some(text) => hasher.update(text.as_bytes()),
        None => {
            // Serializing an in-memory enum cannot fail
            let serialized = serde_json::to_string(content).unwrap_or_default();
            hasher.update(serialized.as_bytes());
        }
    }
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(CONTENT_HASH_LEN);
    digest
}

/// Remove duplicate messages, keeping the earliest chronological occurrence.
///
/// Overlapping session files (main session plus continuation files) repeat
/// identical events, sometimes with missing or synthesized uuids that collide
/// across files. A non-empty uuid already seen is the strongest duplicate
/// signal and is checked first; the content hash catches repeats whose uuids
/// differ or are absent.
///
/// The seen-sets are scoped to this call, so the function is re-entrant and
/// idempotent: deduplicating an already deduplicated list returns it
/// unchanged.
pub fn deduplicate_messages(messages: Vec<Message>) -> Vec<Message> {
    let mut sorted = messages;
    sorted.sort_by_cached_key(|m| m.datetime());

    let mut seen_uuids: HashSet<String> = HashSet::new();
    let mut seen_hashes: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(sorted.len());

    for msg in sorted {
        if !msg.uuid.is_empty() {
            if seen_uuids.contains(&msg.uuid) {
                continue;
            }
            seen_uuids.insert(msg.uuid.clone());
        }

        let content_hash = hash_content(&msg.content);
        if seen_hashes.contains(&content_hash) {
            continue;
        }
        seen_hashes.insert(content_hash);

        unique.push(msg);
    }

    unique
}
