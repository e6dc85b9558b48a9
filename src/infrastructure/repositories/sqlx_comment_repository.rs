use crate::domain::comment::{
    entity::{Comment, FlagDetails},
    repository::CommentRepository,
};
use crate::domain::moderation::status::{ModerationDecision, ModerationStatus};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const COMMENT_COLUMNS: &str = "id, recipe_id, author_id, content, status, moderated_by, \
     moderated_at, moderation_reason, is_flagged, flag_reason, flagged_by, flagged_at, \
     created_at, updated_at";

pub struct SqlxCommentRepository {
    pub pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn create(&self, comment: &Comment) -> Result<Comment, DomainError> {
        let created = sqlx::query_as::<_, Comment>(&format!(
            "INSERT INTO comments (id, recipe_id, author_id, content, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(comment.id)
        .bind(comment.recipe_id)
        .bind(comment.author_id)
        .bind(&comment.content)
        .bind(comment.status)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn apply_moderation(
        &self,
        id: Uuid,
        status: ModerationStatus,
        decision: &ModerationDecision,
    ) -> Result<Comment, DomainError> {
        let updated = sqlx::query_as::<_, Comment>(&format!(
            "UPDATE comments \
             SET status = $2, moderated_by = $3, moderated_at = $4, moderation_reason = $5, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .bind(decision.moderator_id)
        .bind(decision.moderated_at)
        .bind(&decision.reason)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("comment {id}")))?;
        Ok(updated)
    }

    async fn set_flag(&self, id: Uuid, flag: Option<FlagDetails>) -> Result<Comment, DomainError> {
        let updated = match flag {
            Some(flag) => {
                sqlx::query_as::<_, Comment>(&format!(
                    "UPDATE comments \
                     SET is_flagged = TRUE, flag_reason = $2, flagged_by = $3, flagged_at = $4, \
                         updated_at = NOW() \
                     WHERE id = $1 \
                     RETURNING {COMMENT_COLUMNS}"
                ))
                .bind(id)
                .bind(&flag.flag_reason)
                .bind(flag.flagged_by)
                .bind(flag.flagged_at)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Comment>(&format!(
                    "UPDATE comments \
                     SET is_flagged = FALSE, flag_reason = NULL, flagged_by = NULL, \
                         flagged_at = NULL, updated_at = NOW() \
                     WHERE id = $1 \
                     RETURNING {COMMENT_COLUMNS}"
                ))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        };
        updated.ok_or_else(|| DomainError::NotFound(format!("comment {id}")))
    }

    async fn list_for_recipe(
        &self,
        recipe_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE recipe_id = $1 AND status = 'APPROVED' \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(recipe_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_needing_review(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE status = 'PENDING' OR is_flagged \
             ORDER BY created_at ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
