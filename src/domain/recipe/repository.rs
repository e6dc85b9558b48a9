use super::entity::Recipe;
use crate::domain::moderation::status::{ModerationDecision, ModerationStatus, TransitionOutcome};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn create(&self, recipe: &Recipe) -> Result<Recipe, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>, DomainError>;

    /// Writes status and publication flag together with the decision
    /// metadata. The outcome is the only source of both fields.
    async fn apply_moderation(
        &self,
        id: Uuid,
        outcome: TransitionOutcome,
        decision: &ModerationDecision,
    ) -> Result<Recipe, DomainError>;

    /// Removes the recipe together with its ratings and comments in one
    /// transaction. Does not verify afterwards; the caller re-reads.
    async fn delete_cascade(&self, id: Uuid) -> Result<(), DomainError>;

    async fn list_by_status(
        &self,
        status: ModerationStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Recipe>, DomainError>;
}
