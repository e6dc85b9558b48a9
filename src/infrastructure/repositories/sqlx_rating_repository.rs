use crate::domain::rating::{
    entity::{Rating, RecipeAggregate},
    repository::RatingRepository,
};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxRatingRepository {
    pub pool: PgPool,
}

impl SqlxRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for SqlxRatingRepository {
    async fn upsert_and_recompute(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        value: i16,
    ) -> Result<RecipeAggregate, DomainError> {
        // Single transaction: the rating write and the aggregate update are
        // one consistency boundary, and the aggregate is derived from the
        // stored rows, never from a running total.
        let mut tx = self.pool.begin().await?;

        // Lock the recipe row first. Concurrent raters of the same recipe
        // serialize here, so the AVG below always sees every committed row;
        // without the lock two READ COMMITTED writers can each average a
        // set that omits the other's rating.
        sqlx::query_as::<_, (Uuid,)>("SELECT id FROM recipes WHERE id = $1 FOR UPDATE")
            .bind(recipe_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("recipe {recipe_id}")))?;

        sqlx::query(
            "INSERT INTO ratings (user_id, recipe_id, value, created_at, updated_at) \
             VALUES ($1, $2, $3, NOW(), NOW()) \
             ON CONFLICT (user_id, recipe_id) \
             DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(user_id)
        .bind(recipe_id)
        .bind(value)
        .execute(&mut *tx)
        .await?;

        let (average, count): (f64, i64) = sqlx::query_as(
            "SELECT COALESCE(ROUND(AVG(value)::numeric, 2)::float8, 0), COUNT(*) \
             FROM ratings WHERE recipe_id = $1",
        )
        .bind(recipe_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE recipes SET rating = $2, review_count = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(recipe_id)
        .bind(average)
        .bind(count as i32)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(RecipeAggregate {
            average,
            count: count as i32,
        })
    }

    async fn find(&self, user_id: Uuid, recipe_id: Uuid) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query_as::<_, Rating>(
            "SELECT user_id, recipe_id, value, created_at, updated_at \
             FROM ratings WHERE user_id = $1 AND recipe_id = $2",
        )
        .bind(user_id)
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
