use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    disease::{entities::DiseaseEntry, ports::DiseaseRepository},
    doctor::ports::DoctorRepository,
    health::ports::HealthCheckRepository,
    history::{
        entities::{CasePage, FollowUpEntry, StoredCase},
        ports::{CaseRepository, FollowUpRepository, HistoryService},
        value_objects::{GetHistoryInput, SubmitFeedbackInput},
    },
    recommendation::{
        entities::{ConditionAnalysis, FoodRecommendation},
        ports::{LLMClient, RecommendationService},
    },
    user::{entities::User, ports::UserRepository},
};

impl<U, DI, CA, FU, DO, HC, LLM> HistoryService for Service<U, DI, CA, FU, DO, HC, LLM>
where
    U: UserRepository,
    DI: DiseaseRepository,
    CA: CaseRepository,
    FU: FollowUpRepository,
    DO: DoctorRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn save_case(
        &self,
        recommendation: &FoodRecommendation,
        owner: Option<&User>,
    ) -> Result<StoredCase, CoreError> {
        if recommendation.disease.name.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "Disease name cannot be empty".to_string(),
            ));
        }

        let case = StoredCase::from_recommendation(recommendation, owner.map(|user| user.id));
        let dictionary = DiseaseEntry::from_disease(&recommendation.disease);

        self.case_repository
            .create_with_dictionary(case, dictionary)
            .await
    }

    async fn get_history(&self, input: GetHistoryInput) -> Result<CasePage, CoreError> {
        let size = input.size.clamp(1, 100);
        self.case_repository
            .find_page(input.owner_id, input.page, size)
            .await
    }

    async fn get_case(&self, case_id: Uuid) -> Result<StoredCase, CoreError> {
        self.case_repository
            .get_by_id(case_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn delete_case(&self, case_id: Uuid) -> Result<(), CoreError> {
        self.case_repository.delete(case_id).await
    }

    async fn search_cases(&self, keyword: &str) -> Result<Vec<StoredCase>, CoreError> {
        self.case_repository.search_by_disease_name(keyword).await
    }

    async fn submit_feedback(
        &self,
        input: SubmitFeedbackInput,
    ) -> Result<ConditionAnalysis, CoreError> {
        let mut case = self
            .case_repository
            .get_by_id(input.case_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if case.is_session_closed {
            return Err(CoreError::SessionClosed);
        }

        let feedback = match input.notes.as_deref() {
            Some(notes) if !notes.trim().is_empty() => {
                format!("{} - {}", input.condition, notes)
            }
            _ => input.condition.clone(),
        };

        // Classification never fails; a provider outage yields the cautious
        // doctor-required default.
        let analysis_input = format!(
            "Original Disease: {}. User Update: {}",
            case.disease_name, feedback
        );
        let analysis = self
            .analyze_condition(&case.disease_name, &analysis_input)
            .await;

        let entry = FollowUpEntry::new(
            case.id,
            Some(input.condition),
            input.notes,
            Some(analysis.message.clone()),
        );
        case.apply_feedback(&feedback, analysis.status, &analysis.message);

        self.follow_up_repository.append(case, entry).await?;

        Ok(analysis)
    }

    async fn get_timeline(&self, case_id: Uuid) -> Result<Vec<FollowUpEntry>, CoreError> {
        // Surface an explicit 404 for unknown cases instead of an empty list.
        self.case_repository
            .get_by_id(case_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.follow_up_repository.get_by_case_id(case_id).await
    }

    async fn close_case(&self, case_id: Uuid) -> Result<StoredCase, CoreError> {
        let mut case = self
            .case_repository
            .get_by_id(case_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if case.is_session_closed {
            return Ok(case);
        }

        case.is_session_closed = true;
        self.case_repository.update_follow_up_fields(case).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        disease::{entities::Disease, ports::MockDiseaseRepository},
        doctor::ports::MockDoctorRepository,
        health::ports::MockHealthCheckRepository,
        history::{
            entities::FollowUpStatus,
            ports::{MockCaseRepository, MockFollowUpRepository},
        },
        recommendation::ports::MockLLMClient,
        user::ports::MockUserRepository,
    };

    type TestService = Service<
        MockUserRepository,
        MockDiseaseRepository,
        MockCaseRepository,
        MockFollowUpRepository,
        MockDoctorRepository,
        MockHealthCheckRepository,
        MockLLMClient,
    >;

    struct Mocks {
        cases: MockCaseRepository,
        follow_ups: MockFollowUpRepository,
        llm: MockLLMClient,
    }

    impl Default for Mocks {
        fn default() -> Self {
            Self {
                cases: MockCaseRepository::new(),
                follow_ups: MockFollowUpRepository::new(),
                llm: MockLLMClient::new(),
            }
        }
    }

    fn service(mocks: Mocks) -> TestService {
        Service::new(
            MockUserRepository::new(),
            MockDiseaseRepository::new(),
            mocks.cases,
            mocks.follow_ups,
            MockDoctorRepository::new(),
            MockHealthCheckRepository::new(),
            mocks.llm,
        )
    }

    fn sample_recommendation() -> FoodRecommendation {
        let mut recommendation =
            FoodRecommendation::new(Disease::chronic("Gastritis"), "test-provider".to_string());
        recommendation.foods_to_eat = vec!["rice".to_string(), "banana".to_string()];
        recommendation.foods_to_avoid = vec!["chili".to_string()];
        recommendation
    }

    fn monitoring_case() -> StoredCase {
        StoredCase::from_recommendation(&sample_recommendation(), None)
    }

    #[tokio::test]
    async fn test_anonymous_save_has_no_owner() {
        let mut mocks = Mocks::default();
        mocks
            .cases
            .expect_create_with_dictionary()
            .withf(|case, dictionary| {
                case.user_id.is_none()
                    && case.disease_name == "Gastritis"
                    && dictionary.name == "Gastritis"
            })
            .returning(|case, _| Box::pin(async move { Ok(case) }));

        let saved = service(mocks)
            .save_case(&sample_recommendation(), None)
            .await
            .expect("anonymous save must succeed");

        assert!(saved.user_id.is_none());
        assert_eq!(saved.foods_to_eat, vec!["rice", "banana"]);
        assert_eq!(saved.follow_up_status, FollowUpStatus::Monitoring);
    }

    #[tokio::test]
    async fn test_save_rejects_blank_disease_name() {
        let mut recommendation = sample_recommendation();
        recommendation.disease.name = "  ".to_string();

        let err = service(Mocks::default())
            .save_case(&recommendation, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_get_history_clamps_page_size() {
        let mut mocks = Mocks::default();
        mocks
            .cases
            .expect_find_page()
            .withf(|owner, page, size| owner.is_none() && *page == 0 && *size == 100)
            .returning(|_, _, _| {
                Box::pin(async {
                    Ok(CasePage {
                        content: vec![],
                        total_elements: 0,
                        total_pages: 0,
                    })
                })
            });

        service(mocks)
            .get_history(GetHistoryInput {
                owner_id: None,
                page: 0,
                size: 5000,
            })
            .await
            .expect("history must succeed");
    }

    #[tokio::test]
    async fn test_get_case_not_found() {
        let mut mocks = Mocks::default();
        mocks
            .cases
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = service(mocks).get_case(Uuid::nil()).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_submit_feedback_appends_entry_and_moves_status() {
        let case = monitoring_case();
        let case_id = case.id;

        let mut mocks = Mocks::default();
        mocks.cases.expect_get_by_id().returning(move |_| {
            let case = case.clone();
            Box::pin(async move { Ok(Some(case)) })
        });
        mocks.llm.expect_generate().returning(|_| {
            Box::pin(async {
                Ok(r#"{"status": "RECOVERED", "message": "Good progress."}"#.to_string())
            })
        });
        mocks
            .follow_ups
            .expect_append()
            .withf(move |case, entry| {
                case.follow_up_status == FollowUpStatus::Recovered
                    && case.final_advice.as_deref() == Some("Good progress.")
                    && case.latest_feedback.as_deref() == Some("Feeling Better - ate well today")
                    && entry.case_id == case.id
                    && entry.ai_advice.as_deref() == Some("Good progress.")
            })
            .returning(|_, entry| Box::pin(async move { Ok(entry) }));

        let analysis = service(mocks)
            .submit_feedback(SubmitFeedbackInput {
                case_id,
                condition: "Feeling Better".to_string(),
                notes: Some("ate well today".to_string()),
            })
            .await
            .expect("feedback must succeed");

        assert_eq!(analysis.status, FollowUpStatus::Recovered);
    }

    #[tokio::test]
    async fn test_submit_feedback_rejects_closed_session() {
        let mut case = monitoring_case();
        case.is_session_closed = true;
        let case_id = case.id;

        let mut mocks = Mocks::default();
        mocks.cases.expect_get_by_id().returning(move |_| {
            let case = case.clone();
            Box::pin(async move { Ok(Some(case)) })
        });

        let err = service(mocks)
            .submit_feedback(SubmitFeedbackInput {
                case_id,
                condition: "Feeling Worse".to_string(),
                notes: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::SessionClosed);
    }

    #[tokio::test]
    async fn test_close_case_is_idempotent() {
        let mut case = monitoring_case();
        case.is_session_closed = true;
        let case_id = case.id;

        let mut mocks = Mocks::default();
        mocks.cases.expect_get_by_id().returning(move |_| {
            let case = case.clone();
            Box::pin(async move { Ok(Some(case)) })
        });
        // No update expected when the case is already closed.

        let closed = service(mocks).close_case(case_id).await.expect("close");
        assert!(closed.is_session_closed);
    }
}
