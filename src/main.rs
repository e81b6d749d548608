//! Tasklists HTTP server.
//!
//! Reads [`AppConfig`] from the environment, selects `PostgreSQL` or
//! in-memory storage, and serves the task list API until Ctrl-C.

use std::sync::Arc;

use axum::Router;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use tasklists::api::create_router;
use tasklists::config::AppConfig;
use tasklists::task_list::{
    adapters::{memory::InMemoryTaskListRepository, postgres::PostgresTaskListRepository},
    services::TaskListService,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tasklists=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let app = build_router(&config).await?.layer(TraceLayer::new_for_http());

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("tasklists listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("tasklists stopped");
    Ok(())
}

async fn build_router(config: &AppConfig) -> Result<Router, BoxError> {
    let clock = Arc::new(DefaultClock);

    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL is not set; task lists are kept in memory only");
        let repository = Arc::new(InMemoryTaskListRepository::new());
        return Ok(create_router(TaskListService::new(repository, clock)));
    };

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(config.database_pool_size)
        .build(manager)?;
    let repository = Arc::new(PostgresTaskListRepository::new(pool));
    if config.apply_schema {
        repository.apply_schema().await?;
        tracing::info!("task list schema applied");
    }
    tracing::info!(
        pool_size = config.database_pool_size,
        "using PostgreSQL task list storage"
    );
    Ok(create_router(TaskListService::new(repository, clock)))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
