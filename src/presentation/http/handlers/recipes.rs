use crate::application::submit_content::dto::{SubmitRecipeRequest, SubmitRecipeResponse};
use crate::presentation::http::{
    errors::AppError, middleware::auth::require_actor_id, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use uuid::Uuid;

pub async fn submit_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<SubmitRecipeRequest>,
) -> Result<Json<SubmitRecipeResponse>, AppError> {
    let author_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let response = state.submit_content.submit_recipe(author_id, body).await?;
    Ok(Json(response))
}

/// Published recipes only; pending and rejected ones are indistinguishable
/// from missing for the public read, same gate as the comment listing.
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let recipe = sqlx::query_as::<_, crate::domain::recipe::entity::Recipe>(
        "SELECT id, author_id, title, description, status, is_published, moderated_by, \
                moderated_at, moderation_reason, rating, review_count, created_at, updated_at \
         FROM recipes WHERE id = $1 AND is_published",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("recipe {id}")))?;
    Ok(Json(serde_json::json!(recipe)))
}
