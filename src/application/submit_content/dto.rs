use crate::domain::moderation::status::ModerationStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRecipeRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(max = 10000, message = "description is too long"))]
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "content must be 1-2000 characters"))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitRecipeResponse {
    pub id: Uuid,
    pub status: ModerationStatus,
}

#[derive(Debug, Serialize)]
pub struct SubmitCommentResponse {
    pub id: Uuid,
    pub status: ModerationStatus,
}
