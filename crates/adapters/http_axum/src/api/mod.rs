//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod clinics;

use axum::Router;
use axum::routing::get;

use buscadog_app::ports::ClinicRepository;

use crate::state::AppState;

/// Build the `/api/v1/veterinarias` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ClinicRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(clinics::list::<R>))
        .route("/agg", get(clinics::cluster::<R>))
}
