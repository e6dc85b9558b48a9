use crate::domain::moderation::role::Actor;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of entity an audit entry refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Recipe,
    Comment,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Recipe => "recipe",
            EntityType::Comment => "comment",
        }
    }
}

impl std::str::FromStr for EntityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recipe" => Ok(EntityType::Recipe),
            "comment" => Ok(EntityType::Comment),
            other => Err(DomainError::InvalidArgument(format!(
                "entity type must be recipe or comment (got '{other}')"
            ))),
        }
    }
}

/// Immutable record of a moderation or deletion decision.
///
/// `snapshot` serializes the entity as it was before the action, so a
/// deleted recipe survives in the trail. Entries are append-only: never
/// updated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditEntry {
    pub id: Uuid,
    pub entity_id: Uuid,
    pub entity_type: EntityType,
    pub snapshot: serde_json::Value,
    pub actor_id: Uuid,
    pub actor_username: String,
    pub action: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        entity_id: Uuid,
        entity_type: EntityType,
        snapshot: serde_json::Value,
        actor: &Actor,
        action: &str,
        reason: String,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            entity_id,
            entity_type,
            snapshot,
            actor_id: actor.id,
            actor_username: actor.username.clone(),
            action: action.to_string(),
            reason,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Appends one entry. Callers treat failures as best-effort: the
    /// primary mutation stays committed and the error is only logged.
    async fn record(&self, entry: &AuditEntry) -> Result<(), DomainError>;
    async fn list_recent(&self, limit: i64, offset: i64) -> Result<Vec<AuditEntry>, DomainError>;
}
