use crate::application::submit_content::dto::{SubmitCommentRequest, SubmitCommentResponse};
use crate::domain::comment::entity::Comment;
use crate::domain::shared::pagination::PaginationRequest;
use crate::presentation::http::{
    errors::AppError, middleware::auth::require_actor_id, state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

impl ListQuery {
    fn pagination(&self) -> PaginationRequest {
        PaginationRequest {
            limit: self.limit.unwrap_or(50),
            offset: self.offset.unwrap_or(0),
        }
        .clamped()
    }
}

pub async fn submit_comment(
    State(state): State<AppState>,
    Path(recipe_id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<SubmitCommentRequest>,
) -> Result<Json<SubmitCommentResponse>, AppError> {
    let author_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let response = state
        .submit_content
        .submit_comment(author_id, recipe_id, body)
        .await?;
    Ok(Json(response))
}

/// Approved comments only; pending and rejected ones stay out of public
/// listings.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(recipe_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let page = query.pagination();
    let rows = sqlx::query_as::<_, Comment>(
        "SELECT id, recipe_id, author_id, content, status, moderated_by, moderated_at, \
                moderation_reason, is_flagged, flag_reason, flagged_by, flagged_at, \
                created_at, updated_at \
         FROM comments \
         WHERE recipe_id = $1 AND status = 'APPROVED' \
         ORDER BY created_at DESC LIMIT $2 OFFSET $3",
    )
    .bind(recipe_id)
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}
