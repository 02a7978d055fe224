//! session-gate - a session-gated login server.
//!
//! This binary parses configuration, starts the HTTP server, and runs the
//! background session sweeper.

use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_gate::{
    config::Config,
    server::{create_router, RouterConfig},
    session::{CookieCodec, SessionStore},
};

/// How often the background task sweeps expired sessions.
const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Cookie name: {}", config.cookie_name);
    info!("  Session TTL: {}s", config.session_ttl);
    if config.no_tracing {
        info!("  Request tracing: disabled");
    }

    // Create the session store and cookie codec
    let store = SessionStore::with_ttl(Duration::from_secs(config.session_ttl));
    let codec = CookieCodec::new(&config.cookie_secret);

    // Sweep expired sessions in the background
    spawn_prune_task(store.clone());

    // Build the router
    let router_config = RouterConfig::new()
        .with_cookie_name(config.cookie_name.clone())
        .with_tracing(!config.no_tracing);
    let router = create_router(store, codec, router_config);

    // Bind and serve
    let addr = config.bind_address();

    info!("");
    info!("Server listening on: http://{}", addr);
    info!("");
    info!("  Log in at:      http://{}/sessions/new", addr);
    info!("  Protected page: http://{}/secrets", addr);
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Spawn the periodic task that drops expired sessions.
fn spawn_prune_task(store: SessionStore) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PRUNE_INTERVAL);
        // First tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            let removed = store.prune_expired().await;
            if removed > 0 {
                debug!("Pruned {} expired session(s)", removed);
            }
        }
    });
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "session_gate=debug,tower_http=debug"
    } else {
        "session_gate=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
