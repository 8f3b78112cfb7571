//! Clinic service — use-cases for querying clinics on the map.

use buscadog_domain::clinic::{Clinic, ClusterBucket};
use buscadog_domain::error::BuscaDogError;
use buscadog_domain::query::{ClusterQuery, ListQuery};

use crate::ports::ClinicRepository;

/// Application service for the two map queries.
pub struct ClinicService<R> {
    repo: R,
}

impl<R: ClinicRepository> ClinicService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Cluster the clinics inside the query's bounding box.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn cluster(&self, query: ClusterQuery) -> Result<Vec<ClusterBucket>, BuscaDogError> {
        tracing::debug!(
            precision = query.precision,
            limit = query.limit,
            "clustering clinics"
        );
        self.repo
            .clusters_in_bbox(query.bbox, query.precision, query.limit)
            .await
    }

    /// List the individual clinics inside the query's bounding box.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list(&self, query: ListQuery) -> Result<Vec<Clinic>, BuscaDogError> {
        tracing::debug!(limit = query.limit, "listing clinics");
        self.repo.find_in_bbox(query.bbox, query.limit).await
    }
}
