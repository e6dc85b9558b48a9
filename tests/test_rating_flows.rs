use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tastebook::application::rate_recipe::dto::RateRecipeRequest;
use tastebook::application::rate_recipe::use_case::RateRecipeUseCase;
use tastebook::domain::moderation::role::{Actor, IdentityResolver, Role};
use tastebook::domain::moderation::status::{
    ModerationDecision, ModerationStatus, TransitionOutcome,
};
use tastebook::domain::rating::entity::{Rating, RecipeAggregate};
use tastebook::domain::rating::repository::RatingRepository;
use tastebook::domain::recipe::entity::Recipe;
use tastebook::domain::recipe::repository::RecipeRepository;
use tastebook::domain::shared::errors::DomainError;
use uuid::Uuid;

/// In-memory stand-in with the same consistency rule as the SQL
/// implementation: the aggregate is recomputed from the stored rows on
/// every write, never tracked incrementally.
#[derive(Default)]
struct InMemoryRatings {
    rows: Mutex<HashMap<(Uuid, Uuid), i16>>,
}

#[async_trait]
impl RatingRepository for InMemoryRatings {
    async fn upsert_and_recompute(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        value: i16,
    ) -> Result<RecipeAggregate, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        rows.insert((user_id, recipe_id), value);
        let values: Vec<i16> = rows
            .iter()
            .filter(|((_, rid), _)| *rid == recipe_id)
            .map(|(_, v)| *v)
            .collect();
        Ok(RecipeAggregate::from_values(&values))
    }

    async fn find(&self, user_id: Uuid, recipe_id: Uuid) -> Result<Option<Rating>, DomainError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&(user_id, recipe_id)).map(|v| Rating {
            user_id,
            recipe_id,
            value: *v,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }))
    }
}

/// Recipe store that knows a single recipe.
struct SingleRecipe {
    recipe: Recipe,
}

#[async_trait]
impl RecipeRepository for SingleRecipe {
    async fn create(&self, _recipe: &Recipe) -> Result<Recipe, DomainError> {
        unimplemented!("not used by rating flows")
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>, DomainError> {
        Ok((id == self.recipe.id).then(|| self.recipe.clone()))
    }

    async fn apply_moderation(
        &self,
        _id: Uuid,
        _outcome: TransitionOutcome,
        _decision: &ModerationDecision,
    ) -> Result<Recipe, DomainError> {
        unimplemented!("not used by rating flows")
    }

    async fn delete_cascade(&self, _id: Uuid) -> Result<(), DomainError> {
        unimplemented!("not used by rating flows")
    }

    async fn list_by_status(
        &self,
        _status: ModerationStatus,
        _limit: i64,
        _offset: i64,
    ) -> Result<Vec<Recipe>, DomainError> {
        unimplemented!("not used by rating flows")
    }
}

struct AnyUser;

#[async_trait]
impl IdentityResolver for AnyUser {
    async fn resolve(&self, actor_id: Uuid) -> Result<Option<Actor>, DomainError> {
        Ok(Some(Actor {
            id: actor_id,
            username: format!("user-{actor_id}"),
            role: Role::User,
        }))
    }
}

struct NoUser;

#[async_trait]
impl IdentityResolver for NoUser {
    async fn resolve(&self, _actor_id: Uuid) -> Result<Option<Actor>, DomainError> {
        Ok(None)
    }
}

fn rating_service(recipe: Recipe) -> RateRecipeUseCase {
    RateRecipeUseCase::new(
        Arc::new(InMemoryRatings::default()),
        Arc::new(SingleRecipe { recipe }),
        Arc::new(AnyUser),
    )
}

#[tokio::test]
async fn two_raters_then_a_revision() {
    let recipe = Recipe::new(Uuid::now_v7(), "Pho".into(), "Beef noodle soup".into());
    let recipe_id = recipe.id;
    let service = rating_service(recipe);

    let user_a = Uuid::now_v7();
    let user_b = Uuid::now_v7();

    let agg = service
        .rate(user_a, recipe_id, RateRecipeRequest { value: 4 })
        .await
        .unwrap();
    assert_eq!((agg.average, agg.count), (4.0, 1));

    let agg = service
        .rate(user_b, recipe_id, RateRecipeRequest { value: 2 })
        .await
        .unwrap();
    assert_eq!((agg.average, agg.count), (3.0, 2));

    // Re-rating replaces the prior value; count stays at 2.
    let agg = service
        .rate(user_a, recipe_id, RateRecipeRequest { value: 5 })
        .await
        .unwrap();
    assert_eq!((agg.average, agg.count), (3.5, 2));
}

#[tokio::test]
async fn concurrent_raters_never_persist_a_stale_average() {
    let recipe = Recipe::new(Uuid::now_v7(), "Ramen".into(), "Tonkotsu broth".into());
    let recipe_id = recipe.id;
    let service = Arc::new(rating_service(recipe));

    let user_a = Uuid::now_v7();
    let user_b = Uuid::now_v7();

    // Both raters run at once; the store serializes the upsert-and-recompute
    // as one unit, the same contract the row lock gives the SQL version.
    let a = tokio::spawn({
        let service = Arc::clone(&service);
        async move { service.rate(user_a, recipe_id, RateRecipeRequest { value: 5 }).await }
    });
    let b = tokio::spawn({
        let service = Arc::clone(&service);
        async move { service.rate(user_b, recipe_id, RateRecipeRequest { value: 1 }).await }
    });
    let (first, second) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());

    // Whichever write landed second must have seen the other's row.
    let last = if first.count >= second.count { first } else { second };
    assert_eq!((last.average, last.count), (3.0, 2));

    // Idempotent resubmission reads the settled aggregate back: both rows
    // present, average derived from both.
    let settled = service
        .rate(user_a, recipe_id, RateRecipeRequest { value: 5 })
        .await
        .unwrap();
    assert_eq!((settled.average, settled.count), (3.0, 2));
}

#[tokio::test]
async fn same_value_resubmission_changes_nothing() {
    let recipe = Recipe::new(Uuid::now_v7(), "Dal".into(), "Red lentils".into());
    let recipe_id = recipe.id;
    let service = rating_service(recipe);
    let user = Uuid::now_v7();

    let first = service
        .rate(user, recipe_id, RateRecipeRequest { value: 3 })
        .await
        .unwrap();
    let second = service
        .rate(user, recipe_id, RateRecipeRequest { value: 3 })
        .await
        .unwrap();
    assert_eq!(first.average, second.average);
    assert_eq!(first.count, second.count);
}

#[tokio::test]
async fn out_of_range_values_are_rejected_before_any_write() {
    let recipe = Recipe::new(Uuid::now_v7(), "Congee".into(), "Rice porridge".into());
    let recipe_id = recipe.id;
    let service = rating_service(recipe);
    let user = Uuid::now_v7();

    for bad in [0, 6] {
        let err = service
            .rate(user, recipe_id, RateRecipeRequest { value: bad })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }
    // Nothing was stored.
    assert!(service.get(user, recipe_id).await.unwrap().is_none());
}

#[tokio::test]
async fn rating_a_missing_recipe_is_not_found() {
    let recipe = Recipe::new(Uuid::now_v7(), "Laksa".into(), "Coconut broth".into());
    let service = rating_service(recipe);

    let err = service
        .rate(Uuid::now_v7(), Uuid::now_v7(), RateRecipeRequest { value: 4 })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn unresolved_rater_is_unauthenticated() {
    let recipe = Recipe::new(Uuid::now_v7(), "Tagine".into(), "Slow braise".into());
    let recipe_id = recipe.id;
    let service = RateRecipeUseCase::new(
        Arc::new(InMemoryRatings::default()),
        Arc::new(SingleRecipe { recipe }),
        Arc::new(NoUser),
    );

    let err = service
        .rate(Uuid::now_v7(), recipe_id, RateRecipeRequest { value: 4 })
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::Unauthenticated);
}

#[tokio::test]
async fn get_is_a_pure_lookup() {
    let recipe = Recipe::new(Uuid::now_v7(), "Bibimbap".into(), "Rice bowl".into());
    let recipe_id = recipe.id;
    let service = rating_service(recipe);
    let user = Uuid::now_v7();

    assert!(service.get(user, recipe_id).await.unwrap().is_none());
    service
        .rate(user, recipe_id, RateRecipeRequest { value: 5 })
        .await
        .unwrap();
    let stored = service.get(user, recipe_id).await.unwrap().unwrap();
    assert_eq!(stored.value, 5);
}
