use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use log::{info, warn};
use sqlx::postgres::PgConnectOptions;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Args;
use crate::connection::RetryPolicy;
use crate::endpoint_handlers::{
    create_song, delete_song, get_song, get_songs, health, identity, root, update_song,
};

mod config;
mod connection;
mod endpoint_handlers;
mod errors;
mod responses;

/// Everything a handler needs to open its own connection.
#[derive(Clone)]
pub struct DatabaseState {
    options: PgConnectOptions,
    retry: RetryPolicy,
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    // Credentials rule out the `*` wildcards, so methods and headers are mirrored instead.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: DatabaseState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/inclan", get(identity))
        .route("/canciones", get(get_songs).post(create_song))
        .route(
            "/canciones/:id",
            get(get_song).put(update_song).delete(delete_song),
        )
        .route("/health", get(health))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Unable to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()?;

    info!(
        "Database: {}@{}:{}/{}",
        args.database.user, args.database.host, args.database.port, args.database.name
    );
    let state = DatabaseState {
        options: args.database.connect_options(),
        retry: RetryPolicy::default(),
    };
    let app = build_router(state, &args.allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    info!("Welcome to Canciones!");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
