// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::snapshot::SnapshotStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<SnapshotStore>,
}

pub fn app(store: Arc<SnapshotStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .route("/", get(http::root_handler)) // GET / (cached snapshot)
        .route("/version", get(http::version_handler)) // GET /version
        .route("/cpu", get(http::cpu_handler)) // GET /cpu (fresh probe)
        .route("/memory", get(http::memory_handler)) // GET /memory (fresh probe)
        .route("/temp", get(http::temp_handler)) // GET /temp (fresh probe)
        .route("/docker", get(http::docker_handler)) // GET /docker (fresh read)
        .route("/smart", get(http::smart_handler)) // GET /smart (fresh scan)
        .route("/disks", get(http::disks_handler)) // GET /disks (cached ini slice)
        .route("/network", get(http::network_handler)) // GET /network (cached ini slice)
        .route("/shares", get(http::shares_handler)) // GET /shares (cached ini slice)
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
