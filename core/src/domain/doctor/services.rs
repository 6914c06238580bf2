use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    disease::ports::DiseaseRepository,
    doctor::{
        entities::Doctor,
        ports::{DoctorRepository, DoctorService},
    },
    health::ports::HealthCheckRepository,
    history::ports::{CaseRepository, FollowUpRepository},
    recommendation::ports::LLMClient,
    user::ports::UserRepository,
};

impl<U, DI, CA, FU, DO, HC, LLM> DoctorService for Service<U, DI, CA, FU, DO, HC, LLM>
where
    U: UserRepository,
    DI: DiseaseRepository,
    CA: CaseRepository,
    FU: FollowUpRepository,
    DO: DoctorRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn get_doctors(&self) -> Result<Vec<Doctor>, CoreError> {
        self.doctor_repository.list().await
    }
}
