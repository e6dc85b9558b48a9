pub mod sqlx_audit_repository;
pub mod sqlx_comment_repository;
pub mod sqlx_identity_resolver;
pub mod sqlx_rating_repository;
pub mod sqlx_recipe_repository;
