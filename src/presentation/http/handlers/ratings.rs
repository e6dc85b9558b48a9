use crate::application::rate_recipe::dto::{RateRecipeRequest, RateRecipeResponse};
use crate::domain::rating::entity::Rating;
use crate::presentation::http::{
    errors::AppError, middleware::auth::require_actor_id, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use uuid::Uuid;

pub async fn rate_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<RateRecipeRequest>,
) -> Result<Json<RateRecipeResponse>, AppError> {
    let user_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let response = state.rate_recipe.rate(user_id, recipe_id, body).await?;
    Ok(Json(response))
}

pub async fn get_own_rating(
    State(state): State<AppState>,
    Path(recipe_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<Option<Rating>>, AppError> {
    let user_id = require_actor_id(&headers, &state.config.jwt_secret)?;
    let rating = state.rate_recipe.get(user_id, recipe_id).await?;
    Ok(Json(rating))
}
