// Framework bootstrap for the results service runtime.

use crate::frameworks::config::{self, StoreBackend};
use crate::frameworks::db;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::SocketAddr;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let state = build_state().await?;
    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

async fn build_state() -> Result<AppState> {
    match config::store_backend() {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory result store; history is lost on restart");
            Ok(AppState::in_memory())
        }
        StoreBackend::Postgres => {
            let database_url = config::database_url();
            let pool = db::connect_pool(&database_url, config::db_max_connections())
                .map_err(|e| std::io::Error::other(format!("invalid database url: {e}")))?;

            // Keep serving when the database is down; requests report storage failures.
            match db::run_migrations(&pool).await {
                Ok(()) => tracing::info!("database connected and migrated"),
                Err(e) => tracing::error!(error = %e, "database migration failed"),
            }

            Ok(AppState::postgres(pool))
        }
    }
}
