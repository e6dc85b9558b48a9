use crate::domain::moderation::status::{ModerationDecision, ModerationStatus, TransitionOutcome};
use crate::domain::recipe::{entity::Recipe, repository::RecipeRepository};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const RECIPE_COLUMNS: &str = "id, author_id, title, description, status, is_published, \
     moderated_by, moderated_at, moderation_reason, rating, review_count, created_at, updated_at";

pub struct SqlxRecipeRepository {
    pub pool: PgPool,
}

impl SqlxRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for SqlxRecipeRepository {
    async fn create(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        let created = sqlx::query_as::<_, Recipe>(&format!(
            "INSERT INTO recipes (id, author_id, title, description, status, is_published, \
                                  rating, review_count, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(recipe.id)
        .bind(recipe.author_id)
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(recipe.status)
        .bind(recipe.is_published)
        .bind(recipe.rating)
        .bind(recipe.review_count)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>, DomainError> {
        let row = sqlx::query_as::<_, Recipe>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn apply_moderation(
        &self,
        id: Uuid,
        outcome: TransitionOutcome,
        decision: &ModerationDecision,
    ) -> Result<Recipe, DomainError> {
        let updated = sqlx::query_as::<_, Recipe>(&format!(
            "UPDATE recipes \
             SET status = $2, is_published = $3, moderated_by = $4, moderated_at = $5, \
                 moderation_reason = $6, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(id)
        .bind(outcome.status)
        .bind(outcome.is_published)
        .bind(decision.moderator_id)
        .bind(decision.moderated_at)
        .bind(&decision.reason)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("recipe {id}")))?;
        Ok(updated)
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ratings WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM comments WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn list_by_status(
        &self,
        status: ModerationStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Recipe>, DomainError> {
        let rows = sqlx::query_as::<_, Recipe>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes \
             WHERE status = $1 ORDER BY created_at ASC LIMIT $2 OFFSET $3"
        ))
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
