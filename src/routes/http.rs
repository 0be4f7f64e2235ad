// GET handlers: cached snapshot views, fresh per-category probes, ini slices

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use super::AppState;
use crate::models::FileSet;
use crate::version::{NAME, VERSION};

/// GET / — the cached snapshot, stable until an explicit refresh.
pub(super) async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store.current().await;
    axum::Json(json!({ "data": &*snapshot }))
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /cpu — fresh CPU probe, not the cached snapshot.
pub(super) async fn cpu_handler(State(state): State<AppState>) -> Response {
    match state.store.sysinfo_repo().get_cpu_stats().await {
        Ok(cpu) => axum::Json(json!({ "cpu": cpu })).into_response(),
        Err(e) => probe_error("cpu", e),
    }
}

/// GET /memory — fresh memory probe.
pub(super) async fn memory_handler(State(state): State<AppState>) -> Response {
    match state.store.sysinfo_repo().get_memory_stats().await {
        Ok(memory) => axum::Json(json!({ "memory": memory })).into_response(),
        Err(e) => probe_error("memory", e),
    }
}

/// GET /temp — fresh temperature probe.
pub(super) async fn temp_handler(State(state): State<AppState>) -> Response {
    match state.store.sysinfo_repo().get_temperature_stats().await {
        Ok(temp) => axum::Json(json!({ "temp": temp })).into_response(),
        Err(e) => probe_error("temp", e),
    }
}

/// GET /docker — fresh inventory read; null on any failure, never an error.
pub(super) async fn docker_handler(State(state): State<AppState>) -> impl IntoResponse {
    let docker = state.store.docker_repo().read_inventory().await;
    axum::Json(json!({ "docker": docker }))
}

/// GET /smart — fresh scan of the SMART report directory.
pub(super) async fn smart_handler(State(state): State<AppState>) -> impl IntoResponse {
    let smart = state.store.smart_repo().scan().await;
    axum::Json(json!({ "smart": smart }))
}

/// GET /disks — the disks.ini slice of the cached snapshot.
pub(super) async fn disks_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store.current().await;
    axum::Json(json!({ "disks": ini_slice(&snapshot.ini, "disks.ini") }))
}

/// GET /network — the network.ini slice of the cached snapshot.
pub(super) async fn network_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store.current().await;
    axum::Json(json!({ "network": ini_slice(&snapshot.ini, "network.ini") }))
}

/// GET /shares — the shares.ini slice of the cached snapshot.
pub(super) async fn shares_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store.current().await;
    axum::Json(json!({ "shares": ini_slice(&snapshot.ini, "shares.ini") }))
}

/// One named document out of the loaded set. A failed batch serves its
/// exception map; a file absent from the set serves null. Ingestion
/// failures never become a 500.
fn ini_slice(set: &FileSet, file: &str) -> Value {
    match set {
        FileSet::Loaded(map) => match map.get(file) {
            Some(doc) => serde_json::to_value(doc).unwrap_or(Value::Null),
            None => Value::Null,
        },
        FileSet::Failed { exception } => json!({ "exception": exception }),
    }
}

fn probe_error(probe: &str, e: anyhow::Error) -> Response {
    tracing::warn!(error = %e, probe, "probe failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("{probe} probe failed"),
    )
        .into_response()
}
