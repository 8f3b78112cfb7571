pub mod clinics;

pub use clinics::ClinicRepository;
