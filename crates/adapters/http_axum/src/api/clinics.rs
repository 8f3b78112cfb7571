//! JSON REST handlers for clinic map queries.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use buscadog_app::ports::ClinicRepository;
use buscadog_domain::clinic::{Clinic, ClusterBucket};
use buscadog_domain::query::{ClusterQuery, ListQuery};

use crate::error::ApiError;
use crate::state::AppState;

/// Raw query string of the clustering endpoint.
///
/// Every field is an optional string so extraction itself never fails;
/// the domain decides what is missing, malformed or defaulted.
#[derive(Deserialize)]
pub struct ClusterParams {
    pub s: Option<String>,
    pub w: Option<String>,
    pub n: Option<String>,
    pub e: Option<String>,
    pub precision: Option<String>,
    pub limit: Option<String>,
}

/// Raw query string of the listing endpoint.
#[derive(Deserialize)]
pub struct ListParams {
    pub bbox: Option<String>,
    pub limit: Option<String>,
}

/// Possible responses from the clustering endpoint.
pub enum ClusterResponse {
    Ok(Json<Vec<ClusterBucket>>),
}

impl IntoResponse for ClusterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the listing endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Clinic>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1/veterinarias/agg`
pub async fn cluster<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ClusterParams>,
) -> Result<ClusterResponse, ApiError>
where
    R: ClinicRepository + Send + Sync + 'static,
{
    let query = ClusterQuery::parse(
        params.s.as_deref(),
        params.w.as_deref(),
        params.n.as_deref(),
        params.e.as_deref(),
        params.precision.as_deref(),
        params.limit.as_deref(),
    )?;
    let buckets = state.clinic_service.cluster(query).await?;
    Ok(ClusterResponse::Ok(Json(buckets)))
}

/// `GET /api/v1/veterinarias`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ListParams>,
) -> Result<ListResponse, ApiError>
where
    R: ClinicRepository + Send + Sync + 'static,
{
    let query = ListQuery::parse(params.bbox.as_deref(), params.limit.as_deref())?;
    let clinics = state.clinic_service.list(query).await?;
    Ok(ListResponse::Ok(Json(clinics)))
}
