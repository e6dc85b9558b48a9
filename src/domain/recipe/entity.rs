use crate::domain::moderation::status::ModerationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core domain entity for a user-submitted recipe.
///
/// # Lifecycle
/// 1. **Pending** - Created by its author, hidden from ordinary users
/// 2. **Approved** - Published and publicly visible
/// 3. **Rejected** - Hidden with a moderation reason
///
/// # Invariants
/// - `is_published` is true exactly when `status` is `Approved`; both are
///   only ever written together from a [`TransitionOutcome`].
/// - `rating` and `review_count` are derived from the ratings table and
///   recomputed there on every rating write, never hand-edited.
///
/// [`TransitionOutcome`]: crate::domain::moderation::status::TransitionOutcome
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recipe {
    pub id: Uuid,

    /// The submitting author; never a moderator.
    pub author_id: Uuid,

    pub title: String,

    pub description: String,

    /// Current moderation status.
    pub status: ModerationStatus,

    /// Publication flag, coupled to `status` (see invariants).
    pub is_published: bool,

    /// Moderator who last acted on this recipe, if any.
    pub moderated_by: Option<Uuid>,

    pub moderated_at: Option<DateTime<Utc>>,

    pub moderation_reason: Option<String>,

    /// Average rating over all stored rating rows, 2 decimal places.
    pub rating: f64,

    /// Number of stored rating rows.
    pub review_count: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// A freshly submitted recipe always starts pending and unpublished,
    /// whatever its content.
    pub fn new(author_id: Uuid, title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            author_id,
            title,
            description,
            status: ModerationStatus::Pending,
            is_published: false,
            moderated_by: None,
            moderated_at: None,
            moderation_reason: None,
            rating: 0.0,
            review_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
