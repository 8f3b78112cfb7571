use buscadog_domain::clinic::{Clinic, ClusterBucket};
use buscadog_domain::error::BuscaDogError;
use buscadog_domain::geo::BoundingBox;

/// Read-side access to the clinic registry.
///
/// Limits and precision arrive already validated and clamped; an adapter
/// applies them as-is. Implementations decide how buckets are computed,
/// callers only rely on getting at most `limit` rows back.
pub trait ClinicRepository: Send + Sync {
    /// Buckets the clinics inside `bbox` by coordinates rounded to
    /// `precision` decimal digits, at most `limit` buckets.
    fn clusters_in_bbox(
        &self,
        bbox: BoundingBox,
        precision: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<ClusterBucket>, BuscaDogError>> + Send;

    /// Individual clinics inside `bbox`, at most `limit` rows.
    fn find_in_bbox(
        &self,
        bbox: BoundingBox,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<Clinic>, BuscaDogError>> + Send;
}
