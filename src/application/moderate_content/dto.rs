use crate::domain::comment::entity::Comment;
use crate::domain::moderation::status::ModerationStatus;
use crate::domain::recipe::entity::Recipe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct ModerateRequest {
    pub action: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FlagRequest {
    pub reason: Option<String>,
}

/// Outcome of a moderation decision. `is_published` is present for
/// recipes, `is_flagged` for comments.
#[derive(Debug, Serialize)]
pub struct ModerateResponse {
    pub id: Uuid,
    pub status: ModerationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flagged: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct FlagResponse {
    pub id: Uuid,
    pub is_flagged: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteRecipeResponse {
    pub deleted_recipe: serde_json::Value,
    pub deleted_by: String,
    pub timestamp: DateTime<Utc>,
}

/// Items awaiting a moderator: pending recipes plus comments that are
/// pending or flagged.
#[derive(Debug, Serialize)]
pub struct ReviewQueueResponse {
    pub recipes: Vec<Recipe>,
    pub comments: Vec<Comment>,
}
