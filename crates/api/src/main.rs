use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::config::{AppConfig, StoreBackend};
use api::gql::build_schema;
use api::state::AppState;
use infra::store::{MemoryStore, PgStore, SharedStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    let store: SharedStore = match (config.store.backend, &config.store.database) {
        (StoreBackend::Postgres, Some(db_config)) => {
            let pool = infra::db::connect(db_config).await?;
            tracing::info!(
                "Connected to Postgres with max {} connections",
                db_config.max_connections
            );

            if config.store.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                sqlx::migrate!("../../migrations").run(&pool).await?;
                tracing::info!("Database migrations completed successfully");
            }

            Arc::new(PgStore::new(pool))
        }
        (StoreBackend::Postgres, None) => {
            anyhow::bail!("postgres backend selected without a database configuration")
        }
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using the in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState::new(store, config.graphql.clone());

    // Build GraphQL schema from the gql module
    let schema = build_schema(state.clone());

    let app = build_router(state, schema, &config.server);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
