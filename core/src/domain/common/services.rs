use crate::domain::{
    disease::ports::DiseaseRepository,
    doctor::ports::DoctorRepository,
    health::ports::HealthCheckRepository,
    history::ports::{CaseRepository, FollowUpRepository},
    recommendation::ports::LLMClient,
    user::ports::UserRepository,
};

/// Aggregate service over all repository ports. Concrete repository types are
/// chosen once in `application::create_service`; domain logic is implemented as
/// trait impls on this struct, one per bounded context.
#[derive(Debug, Clone)]
pub struct Service<U, DI, CA, FU, DO, HC, LLM>
where
    U: UserRepository,
    DI: DiseaseRepository,
    CA: CaseRepository,
    FU: FollowUpRepository,
    DO: DoctorRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub(crate) user_repository: U,
    pub(crate) disease_repository: DI,
    pub(crate) case_repository: CA,
    pub(crate) follow_up_repository: FU,
    pub(crate) doctor_repository: DO,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: LLM,
}

impl<U, DI, CA, FU, DO, HC, LLM> Service<U, DI, CA, FU, DO, HC, LLM>
where
    U: UserRepository,
    DI: DiseaseRepository,
    CA: CaseRepository,
    FU: FollowUpRepository,
    DO: DoctorRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        disease_repository: DI,
        case_repository: CA,
        follow_up_repository: FU,
        doctor_repository: DO,
        health_check_repository: HC,
        llm_client: LLM,
    ) -> Self {
        Self {
            user_repository,
            disease_repository,
            case_repository,
            follow_up_repository,
            doctor_repository,
            health_check_repository,
            llm_client,
        }
    }
}
