use super::dto::{
    DeleteRecipeResponse, FlagRequest, ModerateRequest, ModerateResponse, ReviewQueueResponse,
};
use crate::domain::comment::{entity::FlagDetails, repository::CommentRepository};
use crate::domain::moderation::audit::{AuditEntry, AuditRepository, EntityType};
use crate::domain::moderation::role::{Actor, IdentityResolver};
use crate::domain::moderation::status::{
    transition, ModerationAction, ModerationDecision, ModerationStatus, normalize_reason,
};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::shared::errors::DomainError;
use chrono::Utc;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Orchestrates every moderation and deletion decision.
///
/// Order of checks is fixed: parse the action token, resolve the actor,
/// compare capability, and only then look the entity up. A Forbidden actor
/// therefore causes zero reads of the moderated row, zero mutations and
/// zero audit entries.
pub struct ModerateContentUseCase {
    recipes: Arc<dyn RecipeRepository>,
    comments: Arc<dyn CommentRepository>,
    audit: Arc<dyn AuditRepository>,
    identity: Arc<dyn IdentityResolver>,
}

impl ModerateContentUseCase {
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        comments: Arc<dyn CommentRepository>,
        audit: Arc<dyn AuditRepository>,
        identity: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            recipes,
            comments,
            audit,
            identity,
        }
    }

    /// Applies an approve/reject (or, for comments, unflag) decision.
    ///
    /// Idempotent with respect to state: re-approving an approved item
    /// changes nothing status-wise but still refreshes the decision
    /// metadata and records an audit entry.
    pub async fn moderate(
        &self,
        entity_type: EntityType,
        id: Uuid,
        actor_id: Uuid,
        request: ModerateRequest,
    ) -> Result<ModerateResponse, DomainError> {
        // Malformed tokens are rejected before any lookup.
        let action = ModerationAction::from_str(&request.action)?;
        let actor = self.require_moderator(actor_id).await?;

        match entity_type {
            EntityType::Recipe => {
                let outcome = transition(action)?;
                let recipe = self
                    .recipes
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| DomainError::NotFound(format!("recipe {id}")))?;
                let snapshot = serde_json::to_value(&recipe)
                    .map_err(|e| DomainError::Unavailable(e.to_string()))?;

                let decision = ModerationDecision::new(actor.id, request.reason);
                let updated = self.recipes.apply_moderation(id, outcome, &decision).await?;

                self.record_audit(AuditEntry::new(
                    id,
                    EntityType::Recipe,
                    snapshot,
                    &actor,
                    action.as_str(),
                    decision.reason.clone(),
                ))
                .await;

                Ok(ModerateResponse {
                    id: updated.id,
                    status: updated.status,
                    is_published: Some(updated.is_published),
                    is_flagged: None,
                })
            }
            EntityType::Comment => {
                let comment = self
                    .comments
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| DomainError::NotFound(format!("comment {id}")))?;
                let snapshot = serde_json::to_value(&comment)
                    .map_err(|e| DomainError::Unavailable(e.to_string()))?;

                let reason = normalize_reason(request.reason.clone());
                let updated = match action {
                    // Unflag-only review: clears the flag, leaves status alone.
                    ModerationAction::Unflag => self.comments.set_flag(id, None).await?,
                    _ => {
                        let outcome = transition(action)?;
                        let decision = ModerationDecision::new(actor.id, request.reason);
                        self.comments
                            .apply_moderation(id, outcome.status, &decision)
                            .await?
                    }
                };

                self.record_audit(AuditEntry::new(
                    id,
                    EntityType::Comment,
                    snapshot,
                    &actor,
                    action.as_str(),
                    reason,
                ))
                .await;

                Ok(ModerateResponse {
                    id: updated.id,
                    status: updated.status,
                    is_published: None,
                    is_flagged: Some(updated.is_flagged),
                })
            }
        }
    }

    /// Marks a comment for re-review. Never mutates `status`.
    pub async fn flag_comment(
        &self,
        id: Uuid,
        actor_id: Uuid,
        request: FlagRequest,
    ) -> Result<super::dto::FlagResponse, DomainError> {
        let actor = self.require_moderator(actor_id).await?;
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("comment {id}")))?;
        let snapshot =
            serde_json::to_value(&comment).map_err(|e| DomainError::Unavailable(e.to_string()))?;

        let reason = normalize_reason(request.reason);
        let flag = FlagDetails::new(actor.id, reason.clone());
        let updated = self.comments.set_flag(id, Some(flag)).await?;

        self.record_audit(AuditEntry::new(
            id,
            EntityType::Comment,
            snapshot,
            &actor,
            "flag",
            reason,
        ))
        .await;

        Ok(super::dto::FlagResponse {
            id: updated.id,
            is_flagged: updated.is_flagged,
        })
    }

    /// Clears the flag without touching status.
    pub async fn unflag_comment(
        &self,
        id: Uuid,
        actor_id: Uuid,
        request: FlagRequest,
    ) -> Result<super::dto::FlagResponse, DomainError> {
        let actor = self.require_moderator(actor_id).await?;
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("comment {id}")))?;
        let snapshot =
            serde_json::to_value(&comment).map_err(|e| DomainError::Unavailable(e.to_string()))?;

        let reason = normalize_reason(request.reason);
        let updated = self.comments.set_flag(id, None).await?;

        self.record_audit(AuditEntry::new(
            id,
            EntityType::Comment,
            snapshot,
            &actor,
            "unflag",
            reason,
        ))
        .await;

        Ok(super::dto::FlagResponse {
            id: updated.id,
            is_flagged: updated.is_flagged,
        })
    }

    /// Destructive cascade: snapshot, audit, delete ratings + comments +
    /// recipe, then verify by re-read.
    ///
    /// The audit entry is captured before deletion so the snapshot survives
    /// the row. If the post-deletion re-read still finds the recipe the
    /// operation reports `Conflict` even though cascade steps already ran;
    /// there is no automatic rollback.
    pub async fn delete_recipe(
        &self,
        id: Uuid,
        actor_id: Uuid,
        reason: Option<String>,
    ) -> Result<DeleteRecipeResponse, DomainError> {
        let actor = self
            .identity
            .resolve(actor_id)
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        if !actor.role.can_delete() {
            return Err(DomainError::Forbidden(
                "admin role required to delete recipes".into(),
            ));
        }

        let recipe = self
            .recipes
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("recipe {id}")))?;
        let snapshot =
            serde_json::to_value(&recipe).map_err(|e| DomainError::Unavailable(e.to_string()))?;

        let reason = normalize_reason(reason);
        self.record_audit(AuditEntry::new(
            id,
            EntityType::Recipe,
            snapshot.clone(),
            &actor,
            "delete",
            reason,
        ))
        .await;

        self.recipes.delete_cascade(id).await?;

        if self.recipes.find_by_id(id).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "recipe {id} still present after deletion"
            )));
        }

        Ok(DeleteRecipeResponse {
            deleted_recipe: snapshot,
            deleted_by: actor.username,
            timestamp: Utc::now(),
        })
    }

    pub async fn review_queue(
        &self,
        actor_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<ReviewQueueResponse, DomainError> {
        self.require_moderator(actor_id).await?;
        let recipes = self
            .recipes
            .list_by_status(ModerationStatus::Pending, limit, offset)
            .await?;
        let comments = self.comments.list_needing_review(limit, offset).await?;
        Ok(ReviewQueueResponse { recipes, comments })
    }

    pub async fn audit_logs(
        &self,
        actor_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AuditEntry>, DomainError> {
        self.require_moderator(actor_id).await?;
        self.audit.list_recent(limit, offset).await
    }

    async fn require_moderator(&self, actor_id: Uuid) -> Result<Actor, DomainError> {
        let actor = self
            .identity
            .resolve(actor_id)
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        if !actor.role.can_moderate() {
            return Err(DomainError::Forbidden(
                "moderator role required".into(),
            ));
        }
        Ok(actor)
    }

    /// Audit writes are best-effort: the primary mutation has already
    /// committed, so a failed append is logged and reported out of band,
    /// never surfaced as a user-visible failure.
    async fn record_audit(&self, entry: AuditEntry) {
        if let Err(err) = self.audit.record(&entry).await {
            tracing::warn!(
                error = %err,
                entity_id = %entry.entity_id,
                action = %entry.action,
                "audit write failed after committed action"
            );
        }
    }
}
