use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    disease::entities::{DiseaseEntry, DiseaseType},
};

/// Repository trait for the disease dictionary. The lookup-or-create that
/// feeds the dictionary happens inside the case-save transaction; this port
/// covers the read surface.
#[cfg_attr(test, mockall::automock)]
pub trait DiseaseRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<DiseaseEntry>, CoreError>> + Send;

    fn count_by_type(
        &self,
        disease_type: DiseaseType,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Service trait for browsing the disease dictionary
pub trait DiseaseService: Send + Sync {
    fn get_dictionary(&self)
    -> impl Future<Output = Result<Vec<DiseaseEntry>, CoreError>> + Send;

    fn count_by_type(
        &self,
        disease_type: DiseaseType,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
