//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use buscadog_app::ports::ClinicRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the clinic API under `/api/v1/veterinarias` and exposes a
/// liveness probe at `/health`. Every request/response pair is logged at
/// the `DEBUG` level through a [`TraceLayer`], and a permissive
/// [`CorsLayer`] lets browser map clients on any origin call the API.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ClinicRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1/veterinarias", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}
