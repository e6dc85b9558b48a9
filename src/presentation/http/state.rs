use crate::{
    application::{
        moderate_content::use_case::ModerateContentUseCase,
        rate_recipe::use_case::RateRecipeUseCase, submit_content::use_case::SubmitContentUseCase,
    },
    config::Config,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub submit_content: Arc<SubmitContentUseCase>,
    pub moderate_content: Arc<ModerateContentUseCase>,
    pub rate_recipe: Arc<RateRecipeUseCase>,
}
