use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    disease::ports::DiseaseRepository,
    doctor::ports::DoctorRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    history::ports::{CaseRepository, FollowUpRepository},
    recommendation::ports::LLMClient,
    user::ports::UserRepository,
};

impl<U, DI, CA, FU, DO, HC, LLM> HealthCheckService for Service<U, DI, CA, FU, DO, HC, LLM>
where
    U: UserRepository,
    DI: DiseaseRepository,
    CA: CaseRepository,
    FU: FollowUpRepository,
    DO: DoctorRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
