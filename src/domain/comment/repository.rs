use super::entity::{Comment, FlagDetails};
use crate::domain::moderation::status::{ModerationDecision, ModerationStatus};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: &Comment) -> Result<Comment, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, DomainError>;

    /// Writes a new status plus decision metadata. Leaves the flag
    /// sub-state untouched.
    async fn apply_moderation(
        &self,
        id: Uuid,
        status: ModerationStatus,
        decision: &ModerationDecision,
    ) -> Result<Comment, DomainError>;

    /// Sets the flag tuple when `flag` is `Some`, clears it when `None`.
    /// Never touches `status`.
    async fn set_flag(&self, id: Uuid, flag: Option<FlagDetails>) -> Result<Comment, DomainError>;

    async fn list_for_recipe(
        &self,
        recipe_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, DomainError>;

    /// Pending or flagged comments, ordered oldest first for the review
    /// queue.
    async fn list_needing_review(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, DomainError>;
}
