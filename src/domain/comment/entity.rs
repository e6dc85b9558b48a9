use crate::domain::moderation::status::ModerationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user comment on a recipe.
///
/// Comments carry two independent axes of moderation state: the
/// pending/approved/rejected `status`, and the orthogonal flag sub-state.
/// Flagging never changes `status`, and approving a flagged comment does
/// not clear the flag; only an explicit unflag does.
///
/// Comments are never hard-deleted by the engine, only status/flag-mutated
/// (recipe deletion cascades are the one exception).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub status: ModerationStatus,
    pub moderated_by: Option<Uuid>,
    pub moderated_at: Option<DateTime<Utc>>,
    pub moderation_reason: Option<String>,
    pub is_flagged: bool,
    pub flag_reason: Option<String>,
    pub flagged_by: Option<Uuid>,
    pub flagged_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Builds a new comment with the initial status the content filter
    /// decided. Clean comments go straight to `Approved`.
    pub fn new(recipe_id: Uuid, author_id: Uuid, content: String, status: ModerationStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            recipe_id,
            author_id,
            content,
            status,
            moderated_by: None,
            moderated_at: None,
            moderation_reason: None,
            is_flagged: false,
            flag_reason: None,
            flagged_by: None,
            flagged_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Flag sub-state written onto a comment by a moderator.
#[derive(Debug, Clone)]
pub struct FlagDetails {
    pub flagged_by: Uuid,
    pub flag_reason: String,
    pub flagged_at: DateTime<Utc>,
}

impl FlagDetails {
    pub fn new(flagged_by: Uuid, flag_reason: String) -> Self {
        Self {
            flagged_by,
            flag_reason,
            flagged_at: Utc::now(),
        }
    }
}
