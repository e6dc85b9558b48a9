use super::dto::{
    SubmitCommentRequest, SubmitCommentResponse, SubmitRecipeRequest, SubmitRecipeResponse,
};
use crate::domain::comment::{entity::Comment, repository::CommentRepository};
use crate::domain::moderation::content_filter;
use crate::domain::moderation::role::IdentityResolver;
use crate::domain::recipe::{entity::Recipe, repository::RecipeRepository};
use crate::domain::shared::errors::DomainError;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Content intake: the only path by which recipes and comments come into
/// existence. Recipes always start pending; comments get their initial
/// status from the content filter.
pub struct SubmitContentUseCase {
    recipes: Arc<dyn RecipeRepository>,
    comments: Arc<dyn CommentRepository>,
    identity: Arc<dyn IdentityResolver>,
}

impl SubmitContentUseCase {
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        comments: Arc<dyn CommentRepository>,
        identity: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            recipes,
            comments,
            identity,
        }
    }

    pub async fn submit_recipe(
        &self,
        author_id: Uuid,
        request: SubmitRecipeRequest,
    ) -> Result<SubmitRecipeResponse, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::InvalidArgument(e.to_string()))?;
        self.identity
            .resolve(author_id)
            .await?
            .ok_or(DomainError::Unauthenticated)?;

        let recipe = Recipe::new(author_id, request.title, request.description);
        let created = self.recipes.create(&recipe).await?;
        Ok(SubmitRecipeResponse {
            id: created.id,
            status: created.status,
        })
    }

    pub async fn submit_comment(
        &self,
        author_id: Uuid,
        recipe_id: Uuid,
        request: SubmitCommentRequest,
    ) -> Result<SubmitCommentResponse, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::InvalidArgument(e.to_string()))?;
        self.identity
            .resolve(author_id)
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        self.recipes
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("recipe {recipe_id}")))?;

        let status = content_filter::initial_comment_status(&request.content);
        let comment = Comment::new(recipe_id, author_id, request.content, status);
        let created = self.comments.create(&comment).await?;
        Ok(SubmitCommentResponse {
            id: created.id,
            status: created.status,
        })
    }
}
