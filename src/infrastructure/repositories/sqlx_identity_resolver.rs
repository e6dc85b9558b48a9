use crate::domain::moderation::role::{Actor, IdentityResolver};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Identity collaborator backed by the users table. Roles are read fresh
/// on every call so demotions take effect immediately.
pub struct SqlxIdentityResolver {
    pub pool: PgPool,
}

impl SqlxIdentityResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityResolver for SqlxIdentityResolver {
    async fn resolve(&self, actor_id: Uuid) -> Result<Option<Actor>, DomainError> {
        let actor = sqlx::query_as::<_, Actor>(
            "SELECT id, username, role FROM users WHERE id = $1",
        )
        .bind(actor_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(actor)
    }
}
