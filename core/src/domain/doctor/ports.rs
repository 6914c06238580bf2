use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, doctor::entities::Doctor};

/// Repository trait for the doctor directory
#[cfg_attr(test, mockall::automock)]
pub trait DoctorRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Doctor>, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn create(&self, doctor: Doctor) -> impl Future<Output = Result<Doctor, CoreError>> + Send;
}

/// Service trait for the doctor directory
pub trait DoctorService: Send + Sync {
    fn get_doctors(&self) -> impl Future<Output = Result<Vec<Doctor>, CoreError>> + Send;
}
