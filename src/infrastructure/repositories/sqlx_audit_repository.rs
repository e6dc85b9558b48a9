use crate::domain::moderation::audit::{AuditEntry, AuditRepository};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct SqlxAuditRepository {
    pub pool: PgPool,
}

impl SqlxAuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for SqlxAuditRepository {
    async fn record(&self, entry: &AuditEntry) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO audit_log (id, entity_id, entity_type, snapshot, actor_id, \
                                    actor_username, action, reason, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(entry.id)
        .bind(entry.entity_id)
        .bind(entry.entity_type)
        .bind(&entry.snapshot)
        .bind(entry.actor_id)
        .bind(&entry.actor_username)
        .bind(&entry.action)
        .bind(&entry.reason)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_recent(&self, limit: i64, offset: i64) -> Result<Vec<AuditEntry>, DomainError> {
        let rows = sqlx::query_as::<_, AuditEntry>(
            "SELECT id, entity_id, entity_type, snapshot, actor_id, actor_username, \
                    action, reason, created_at \
             FROM audit_log ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
