use super::entity::{Rating, RecipeAggregate};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Upserts the (user, recipe) rating and recomputes the recipe's
    /// average and count from the stored rows, all inside one transaction.
    /// A reader never observes the rating write without the aggregate
    /// update or vice versa.
    async fn upsert_and_recompute(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        value: i16,
    ) -> Result<RecipeAggregate, DomainError>;

    async fn find(&self, user_id: Uuid, recipe_id: Uuid) -> Result<Option<Rating>, DomainError>;
}
