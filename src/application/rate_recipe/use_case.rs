use super::dto::{RateRecipeRequest, RateRecipeResponse};
use crate::domain::moderation::role::IdentityResolver;
use crate::domain::rating::{
    entity::{validate_rating_value, Rating},
    repository::RatingRepository,
};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::shared::errors::DomainError;
use std::sync::Arc;
use uuid::Uuid;

/// Rating submission and lookup. The aggregate returned is always the one
/// the transactional recompute produced, so callers see the value a
/// concurrent reader would.
pub struct RateRecipeUseCase {
    ratings: Arc<dyn RatingRepository>,
    recipes: Arc<dyn RecipeRepository>,
    identity: Arc<dyn IdentityResolver>,
}

impl RateRecipeUseCase {
    pub fn new(
        ratings: Arc<dyn RatingRepository>,
        recipes: Arc<dyn RecipeRepository>,
        identity: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            ratings,
            recipes,
            identity,
        }
    }

    /// Upserts the caller's rating for a recipe. A repeat submission for
    /// the same (user, recipe) pair replaces the prior value; the count
    /// never double-counts a user.
    pub async fn rate(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        request: RateRecipeRequest,
    ) -> Result<RateRecipeResponse, DomainError> {
        let value = validate_rating_value(request.value)?;
        self.identity
            .resolve(user_id)
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        self.recipes
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("recipe {recipe_id}")))?;

        let aggregate = self
            .ratings
            .upsert_and_recompute(user_id, recipe_id, value)
            .await?;
        Ok(RateRecipeResponse {
            average: aggregate.average,
            count: aggregate.count,
        })
    }

    /// Pure lookup of the caller's own rating; no side effects.
    pub async fn get(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<Rating>, DomainError> {
        self.ratings.find(user_id, recipe_id).await
    }
}
