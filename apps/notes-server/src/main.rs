use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, error};

use notes_api::{build_router, with_cors, AppState};
use notes_infrastructure::database::{create_pool, run_migrations};
use notes_infrastructure::{PgHealthRepository, PgMessageRepository, PgSessionRepository, PgUserRepository};
use notes_security::SessionCookie;
use notes_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize telemetry
    notes_shared::telemetry::init_telemetry();

    info!("Notes server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.acquire_timeout_seconds,
    )
    .await?;
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
        info!("Database migrations applied.");
    }

    // Create App State
    let session_cookie = SessionCookie::new(
        config.session.cookie_name.clone(),
        config.session.ttl_seconds,
        config.is_production(),
        config.is_cross_origin(),
    );
    let state = AppState::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgSessionRepository::new(pool.clone())),
        Arc::new(PgMessageRepository::new(pool.clone())),
        Arc::new(PgHealthRepository::new(pool)),
        session_cookie,
        config.session.ttl_seconds,
    );

    // Build router
    let mut app = build_router(state);
    if let Some(origin) = config.cors.origin.as_deref().filter(|_| config.is_cross_origin()) {
        app = with_cors(app, origin)?;
        info!("Cross-origin mode enabled for {}", origin);
    }

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
