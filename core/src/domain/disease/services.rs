use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    disease::{
        entities::{DiseaseEntry, DiseaseType},
        ports::{DiseaseRepository, DiseaseService},
    },
    doctor::ports::DoctorRepository,
    health::ports::HealthCheckRepository,
    history::ports::{CaseRepository, FollowUpRepository},
    recommendation::ports::LLMClient,
    user::ports::UserRepository,
};

impl<U, DI, CA, FU, DO, HC, LLM> DiseaseService for Service<U, DI, CA, FU, DO, HC, LLM>
where
    U: UserRepository,
    DI: DiseaseRepository,
    CA: CaseRepository,
    FU: FollowUpRepository,
    DO: DoctorRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn get_dictionary(&self) -> Result<Vec<DiseaseEntry>, CoreError> {
        self.disease_repository.list().await
    }

    async fn count_by_type(&self, disease_type: DiseaseType) -> Result<u64, CoreError> {
        self.disease_repository.count_by_type(disease_type).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        disease::{entities::Disease, ports::MockDiseaseRepository},
        doctor::ports::MockDoctorRepository,
        health::ports::MockHealthCheckRepository,
        history::ports::{MockCaseRepository, MockFollowUpRepository},
        recommendation::ports::MockLLMClient,
        user::ports::MockUserRepository,
    };

    #[tokio::test]
    async fn test_dictionary_listing_passes_through() {
        let mut diseases = MockDiseaseRepository::new();
        diseases.expect_list().returning(|| {
            Box::pin(async {
                Ok(vec![DiseaseEntry::from_disease(&Disease::chronic(
                    "Gastritis",
                ))])
            })
        });

        let service = Service::new(
            MockUserRepository::new(),
            diseases,
            MockCaseRepository::new(),
            MockFollowUpRepository::new(),
            MockDoctorRepository::new(),
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
        );

        let entries = service.get_dictionary().await.expect("listing succeeds");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Gastritis");
        assert_eq!(entries[0].disease_type, DiseaseType::Chronic);
    }
}
