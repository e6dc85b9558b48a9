use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capability level of an actor.
///
/// The derived order is the permission hierarchy: `User < Moderator < Admin
/// < Owner`. Every capability check in the engine is a comparison against
/// this order, never an ad hoc string match.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, Default, PartialEq, Eq, PartialOrd, Ord,
)]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
    Owner,
}

impl Role {
    /// Moderator and above can approve, reject and flag content.
    pub fn can_moderate(&self) -> bool {
        *self >= Role::Moderator
    }

    /// Admin and owner only: destructive recipe deletion and account
    /// management on the identity side.
    pub fn can_delete(&self) -> bool {
        *self >= Role::Admin
    }
}

/// Resolved actor identity: who is performing a mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Actor {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

/// External identity collaborator. The role is always re-read from the
/// identity store before a mutation; token claims are only trusted for the
/// actor id itself.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, actor_id: Uuid) -> Result<Option<Actor>, DomainError>;
}
