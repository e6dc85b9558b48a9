use super::{
    handlers::{comments, health, moderation, ratings, recipes},
    state::AppState,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn create_router(state: AppState) -> Router {
    let moderation_routes = Router::new()
        .route("/api/v1/moderation/queue", get(moderation::review_queue))
        .route(
            "/api/v1/moderation/{entity_type}/{id}",
            post(moderation::moderate_entity),
        )
        .route(
            "/api/v1/moderation/comments/{id}/flag",
            post(moderation::flag_comment),
        )
        .route(
            "/api/v1/moderation/comments/{id}/unflag",
            post(moderation::unflag_comment),
        )
        .route(
            "/api/v1/moderation/recipes/{id}",
            delete(moderation::delete_recipe),
        )
        .route("/api/v1/moderation/audit-logs", get(moderation::list_audit_logs));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/recipes", post(recipes::submit_recipe))
        .route("/api/v1/recipes/{id}", get(recipes::get_recipe))
        .route(
            "/api/v1/recipes/{id}/comments",
            post(comments::submit_comment).get(comments::list_comments),
        )
        .route(
            "/api/v1/recipes/{id}/rating",
            post(ratings::rate_recipe).get(ratings::get_own_rating),
        )
        .merge(moderation_routes)
        .with_state(state)
}
