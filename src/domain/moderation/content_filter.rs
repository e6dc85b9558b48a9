//! Blocklist classification for newly submitted free text.
//!
//! Pure and deterministic: lowercase the input once, then substring-match
//! against a fixed list of terms. Used only to pick the initial status of a
//! comment; recipes always start pending regardless of content.

use crate::domain::moderation::status::ModerationStatus;

/// Result of classifying a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Clean,
    /// Carries the first blocklist term that matched, for the review queue.
    Flagged { term: &'static str },
}

const BLOCKLIST: &[&str] = &[
    "spam",
    "scam",
    "buy now",
    "free money",
    "click here",
    "crypto giveaway",
    "idiot",
    "stupid",
    "moron",
    "trash",
    "shit",
    "bitch",
    "asshole",
    "bastard",
    "kill yourself",
    "go die",
];

/// Classifies `text` as clean or flagged.
///
/// Case-insensitive substring match; empty input is always clean. Safe to
/// call concurrently, no state.
pub fn classify(text: &str) -> Classification {
    if text.trim().is_empty() {
        return Classification::Clean;
    }
    let lowered = text.to_lowercase();
    for term in BLOCKLIST.iter().copied() {
        if lowered.contains(term) {
            return Classification::Flagged { term };
        }
    }
    Classification::Clean
}

/// Initial status for a freshly submitted comment: clean text skips review
/// entirely, flagged text waits for a moderator.
pub fn initial_comment_status(text: &str) -> ModerationStatus {
    match classify(text) {
        Classification::Clean => ModerationStatus::Approved,
        Classification::Flagged { .. } => ModerationStatus::Pending,
    }
}
