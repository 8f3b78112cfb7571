//! Shared application state for axum handlers.

use std::sync::Arc;

use buscadog_app::ports::ClinicRepository;
use buscadog_app::services::clinic_service::ClinicService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Clinic query service.
    pub clinic_service: Arc<ClinicService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            clinic_service: Arc::clone(&self.clinic_service),
        }
    }
}

impl<R> AppState<R>
where
    R: ClinicRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(clinic_service: ClinicService<R>) -> Self {
        Self {
            clinic_service: Arc::new(clinic_service),
        }
    }
}
