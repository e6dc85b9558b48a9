use crate::application::moderate_content::dto::{
    DeleteRecipeResponse, FlagRequest, FlagResponse, ModerateRequest, ModerateResponse,
    ReviewQueueResponse,
};
use crate::domain::moderation::audit::{AuditEntry, EntityType};
use crate::presentation::http::{
    errors::AppError, middleware::auth::require_actor_id, state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

impl PageQuery {
    fn bounds(&self) -> (i64, i64) {
        (
            self.limit.unwrap_or(50).clamp(1, 200),
            self.offset.unwrap_or(0).max(0),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub reason: Option<String>,
}

/// Approve/reject a recipe or comment (plus unflag for comments). The path
/// carries the entity type so one endpoint covers both kinds.
pub async fn moderate_entity(
    State(state): State<AppState>,
    Path((entity_type, id)): Path<(String, Uuid)>,
    headers: HeaderMap,
    Json(body): Json<ModerateRequest>,
) -> Result<Json<ModerateResponse>, AppError> {
    let actor_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let entity_type = EntityType::from_str(&entity_type)?;
    let response = state
        .moderate_content
        .moderate(entity_type, id, actor_id, body)
        .await?;
    Ok(Json(response))
}

pub async fn flag_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<FlagRequest>,
) -> Result<Json<FlagResponse>, AppError> {
    let actor_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let response = state.moderate_content.flag_comment(id, actor_id, body).await?;
    Ok(Json(response))
}

pub async fn unflag_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<FlagRequest>,
) -> Result<Json<FlagResponse>, AppError> {
    let actor_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let response = state
        .moderate_content
        .unflag_comment(id, actor_id, body)
        .await?;
    Ok(Json(response))
}

pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<DeleteRequest>,
) -> Result<Json<DeleteRecipeResponse>, AppError> {
    let actor_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let response = state
        .moderate_content
        .delete_recipe(id, actor_id, body.reason)
        .await?;
    Ok(Json(response))
}

pub async fn review_queue(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Json<ReviewQueueResponse>, AppError> {
    let actor_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let (limit, offset) = query.bounds();
    let response = state
        .moderate_content
        .review_queue(actor_id, limit, offset)
        .await?;
    Ok(Json(response))
}

pub async fn list_audit_logs(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<AuditEntry>>, AppError> {
    let actor_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let (limit, offset) = query.bounds();
    let entries = state
        .moderate_content
        .audit_logs(actor_id, limit, offset)
        .await?;
    Ok(Json(entries))
}
