use axum::Router;

use crate::common;

use common::Config;
use common::CONFIG;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// File served for every path that isn't in the bundle, so the client router
/// can resolve `/dashboard` and friends.
fn spa_index(dist_dir: &Path) -> PathBuf {
    dist_dir.join("index.html")
}

fn app(config: &Config) -> Router {
    let dist_dir = PathBuf::from(&config.dist_dir);
    let serve_dir = ServeDir::new(&dist_dir).fallback(ServeFile::new(spa_index(&dist_dir)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .fallback_service(serve_dir)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "testmaster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CONFIG.clone();
    if !spa_index(Path::new(&config.dist_dir)).exists() {
        tracing::warn!("no index.html in {}, build the frontend first", config.dist_dir);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let server = match axum::Server::try_bind(&addr) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            return;
        }
    };

    tracing::info!("serving {} on {}", config.dist_dir, addr);
    if let Err(e) = server.serve(app(&config).into_make_service()).await {
        tracing::error!("server stopped: {}", e);
    }
}
