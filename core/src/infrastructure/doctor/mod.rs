pub mod mappers;
pub mod repository;

pub use repository::{PostgresDoctorRepository, seed_doctors};
