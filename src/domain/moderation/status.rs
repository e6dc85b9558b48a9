use crate::domain::shared::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Fallback reason stored whenever a moderator submits no text. The audit
/// trail never carries a null reason.
pub const DEFAULT_REASON: &str = "No reason provided";

/// Moderation lifecycle of a recipe or comment.
///
/// `Pending` is the initial state. `Approved` and `Rejected` are terminal
/// unless the item is re-moderated; re-moderation from any state is allowed
/// and idempotent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, Default, PartialEq, Eq)]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    /// Only approved content is visible to ordinary users.
    pub fn is_public(&self) -> bool {
        matches!(self, ModerationStatus::Approved)
    }
}

/// Action token accepted by the moderation endpoint.
///
/// Parsing happens before any entity lookup, so an unknown token is an
/// `InvalidArgument` even for ids that do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
    Unflag,
}

impl ModerationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Reject => "reject",
            ModerationAction::Unflag => "unflag",
        }
    }
}

impl FromStr for ModerationAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approve" => Ok(ModerationAction::Approve),
            "reject" => Ok(ModerationAction::Reject),
            "unflag" => Ok(ModerationAction::Unflag),
            other => Err(DomainError::InvalidArgument(format!(
                "action must be one of approve, reject, unflag (got '{other}')"
            ))),
        }
    }
}

/// Result of a status transition: the new status together with the
/// publication flag it implies.
///
/// Status and `is_published` are never written separately; this struct is
/// the only way both fields get new values, which keeps the
/// `is_published == (status == Approved)` invariant structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub status: ModerationStatus,
    pub is_published: bool,
}

/// Computes the transition for an approve/reject decision.
///
/// `Unflag` is not a status transition; callers route it to the flag
/// sub-state instead and must not pass it here.
pub fn transition(action: ModerationAction) -> Result<TransitionOutcome, DomainError> {
    match action {
        ModerationAction::Approve => Ok(TransitionOutcome {
            status: ModerationStatus::Approved,
            is_published: true,
        }),
        ModerationAction::Reject => Ok(TransitionOutcome {
            status: ModerationStatus::Rejected,
            is_published: false,
        }),
        ModerationAction::Unflag => Err(DomainError::InvalidArgument(
            "unflag is not a status transition".into(),
        )),
    }
}

/// Who moderated, when, and why. Written alongside every transition, also
/// on idempotent re-moderation.
#[derive(Debug, Clone)]
pub struct ModerationDecision {
    pub moderator_id: Uuid,
    pub moderated_at: DateTime<Utc>,
    pub reason: String,
}

impl ModerationDecision {
    pub fn new(moderator_id: Uuid, reason: Option<String>) -> Self {
        Self {
            moderator_id,
            moderated_at: Utc::now(),
            reason: normalize_reason(reason),
        }
    }
}

/// Trims the reason and substitutes the fixed placeholder when empty.
pub fn normalize_reason(reason: Option<String>) -> String {
    reason
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_REASON)
        .to_string()
}
