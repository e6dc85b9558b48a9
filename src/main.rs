use std::sync::Arc;
use std::time::Duration;

use http::{HeaderValue, Method, header};
use tastebook::{
    application::{
        moderate_content::use_case::ModerateContentUseCase,
        rate_recipe::use_case::RateRecipeUseCase, submit_content::use_case::SubmitContentUseCase,
    },
    config::Config,
    infrastructure::{
        database::pool::create_pool,
        repositories::{
            sqlx_audit_repository::SqlxAuditRepository,
            sqlx_comment_repository::SqlxCommentRepository,
            sqlx_identity_resolver::SqlxIdentityResolver,
            sqlx_rating_repository::SqlxRatingRepository,
            sqlx_recipe_repository::SqlxRecipeRepository,
        },
    },
    presentation::http::{routes::create_router, state::AppState},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,tastebook=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(&config).await?;
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await?;

    let recipes = Arc::new(SqlxRecipeRepository::new(db.clone()));
    let comments = Arc::new(SqlxCommentRepository::new(db.clone()));
    let ratings = Arc::new(SqlxRatingRepository::new(db.clone()));
    let audit = Arc::new(SqlxAuditRepository::new(db.clone()));
    let identity = Arc::new(SqlxIdentityResolver::new(db.clone()));

    let state = AppState {
        db: db.clone(),
        config: config.clone(),
        submit_content: Arc::new(SubmitContentUseCase::new(
            recipes.clone(),
            comments.clone(),
            identity.clone(),
        )),
        moderate_content: Arc::new(ModerateContentUseCase::new(
            recipes.clone(),
            comments.clone(),
            audit.clone(),
            identity.clone(),
        )),
        rate_recipe: Arc::new(RateRecipeUseCase::new(
            ratings.clone(),
            recipes.clone(),
            identity.clone(),
        )),
    };

    // Development allows any origin; production restricts to configured ones
    let cors = if cfg!(debug_assertions) {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(vec![]))
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    };

    let app = create_router(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("moderation engine listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
