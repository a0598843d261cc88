//! The backend: serves the catalog, stores the selection list and hands out
//! the catalog images.

use std::{path::Path, sync::Arc};

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info};

pub mod error;
pub mod repository;
pub mod routes;

use crate::adapters::LocalStorage;
use crate::core::{ConfigProvider, Result};
use repository::PlaceFiles;
use routes::{
    not_found_handler, places_handler, update_user_places_handler, user_places_handler,
};

#[derive(Clone)]
pub struct AppState {
    pub files: Arc<PlaceFiles<LocalStorage>>,
}

impl AppState {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            files: Arc::new(PlaceFiles::new(LocalStorage::new(data_dir.as_ref()))),
        }
    }
}

pub fn router(state: AppState, images_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([CONTENT_TYPE]);

    let images = ServeDir::new(images_dir.as_ref())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found_handler.into_service());

    Router::new()
        .route("/places", get(places_handler))
        .route(
            "/user-places",
            get(user_places_handler).put(update_user_places_handler),
        )
        .fallback_service(images)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn start_server<C: ConfigProvider>(config: &C) -> Result<()> {
    info!("Using data directory {}", config.data_dir());
    let state = AppState::new(config.data_dir());
    let app = router(state, config.images_dir());

    let address = format!("0.0.0.0:{}", config.port());
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;

    info!("Backend running on http://localhost:{}", config.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
