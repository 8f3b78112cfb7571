pub mod clinic_service;

pub use clinic_service::ClinicService;
