use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    disease::{entities::Disease, ports::DiseaseRepository},
    doctor::ports::DoctorRepository,
    health::ports::HealthCheckRepository,
    history::{
        entities::FollowUpStatus,
        ports::{CaseRepository, FollowUpRepository},
    },
    recommendation::{
        entities::{ConditionAnalysis, FoodRecommendation},
        ports::{LLMClient, RecommendationService},
        prompts::{build_follow_up_prompt, build_recommendation_prompt, strip_code_fences},
    },
    user::{entities::User, ports::UserRepository},
};

impl<U, DI, CA, FU, DO, HC, LLM> RecommendationService for Service<U, DI, CA, FU, DO, HC, LLM>
where
    U: UserRepository,
    DI: DiseaseRepository,
    CA: CaseRepository,
    FU: FollowUpRepository,
    DO: DoctorRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn get_recommendation(
        &self,
        disease: Disease,
        patient: Option<&User>,
    ) -> Result<FoodRecommendation, CoreError> {
        // 1. Validate
        if disease.name.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "Disease name cannot be empty".to_string(),
            ));
        }

        // 2. Build prompt
        let prompt = build_recommendation_prompt(&disease, patient);

        // 3. Call the provider, single attempt
        let raw = self.llm_client.generate(prompt).await?;
        if raw.trim().is_empty() {
            return Err(CoreError::ExternalServiceError(
                "Empty response from AI".to_string(),
            ));
        }

        // 4-6. Parse with fallback, tag with provider label
        Ok(parse_recommendation(
            disease,
            self.llm_client.provider_label(),
            raw,
        ))
    }

    async fn analyze_condition(&self, disease_name: &str, feedback: &str) -> ConditionAnalysis {
        let prompt = build_follow_up_prompt(disease_name, feedback);

        let raw = match self.llm_client.generate(prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Condition analysis failed, falling back: {}", e);
                return ConditionAnalysis::doctor_fallback();
            }
        };

        let cleaned = strip_code_fences(&raw);
        let json: serde_json::Value = match serde_json::from_str(&cleaned) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Condition analysis reply is not JSON, falling back: {}", e);
                return ConditionAnalysis::doctor_fallback();
            }
        };

        ConditionAnalysis {
            status: json
                .get("status")
                .and_then(|v| v.as_str())
                .map(FollowUpStatus::from)
                .unwrap_or(FollowUpStatus::Monitoring),
            message: json
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Please consult a doctor.")
                .to_string(),
        }
    }
}

/// Parses the cleaned reply into a structured recommendation. A malformed
/// reply never fails the pipeline: the raw text becomes a fallback note so the
/// caller still receives a usable result.
fn parse_recommendation(
    disease: Disease,
    ai_provider: String,
    raw: String,
) -> FoodRecommendation {
    let mut recommendation = FoodRecommendation::new(disease, ai_provider);
    let cleaned = strip_code_fences(&raw);

    match serde_json::from_str::<serde_json::Value>(&cleaned) {
        Ok(json) => {
            recommendation.foods_to_eat = string_list(&json, "foodsToEat");
            recommendation.foods_to_avoid = string_list(&json, "foodsToAvoid");
            recommendation.additional_notes = json
                .get("additionalNotes")
                .and_then(|v| v.as_str())
                .map(str::to_string);
        }
        Err(_) => {
            recommendation.additional_notes =
                Some(format!("Raw AI Response (Format Error): {raw}"));
        }
    }

    recommendation.raw_response = Some(raw);
    recommendation
}

fn string_list(json: &serde_json::Value, key: &str) -> Vec<String> {
    json.get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        disease::ports::MockDiseaseRepository,
        doctor::ports::MockDoctorRepository,
        health::ports::MockHealthCheckRepository,
        history::ports::{MockCaseRepository, MockFollowUpRepository},
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

    fn service_with_llm(llm: MockLLMClient) -> TestService {
        Service::new(
            MockUserRepository::new(),
            MockDiseaseRepository::new(),
            MockCaseRepository::new(),
            MockFollowUpRepository::new(),
            MockDoctorRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
        )
    }

    fn llm_returning(reply: &str) -> MockLLMClient {
        let reply = reply.to_string();
        let mut llm = MockLLMClient::new();
        llm.expect_generate()
            .returning(move |_| {
                let reply = reply.clone();
                Box::pin(async move { Ok(reply) })
            });
        llm.expect_provider_label()
            .return_const("Google Gemini (gemini-2.5-flash)".to_string());
        llm
    }

    fn failing_llm() -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate().returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError("boom".to_string()))
            })
        });
        llm.expect_provider_label().return_const("test".to_string());
        llm
    }

    #[tokio::test]
    async fn test_get_recommendation_parses_food_lists() {
        let reply = r#"```json
{ "foodsToEat": ["rice", "banana"], "foodsToAvoid": ["chili"], "additionalNotes": "Eat light." }
```"#;
        let service = service_with_llm(llm_returning(reply));

        let recommendation = service
            .get_recommendation(Disease::chronic("Gastritis"), None)
            .await
            .expect("pipeline should succeed");

        assert_eq!(recommendation.foods_to_eat, vec!["rice", "banana"]);
        assert_eq!(recommendation.foods_to_avoid, vec!["chili"]);
        assert_eq!(recommendation.additional_notes.as_deref(), Some("Eat light."));
        assert!(!recommendation.ai_provider.is_empty());
        assert!(recommendation.raw_response.is_some());
    }

    #[tokio::test]
    async fn test_get_recommendation_rejects_blank_name() {
        let service = service_with_llm(MockLLMClient::new());
        let err = service
            .get_recommendation(Disease::chronic("   "), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_get_recommendation_falls_back_on_malformed_reply() {
        let service = service_with_llm(llm_returning("sorry, I cannot answer in JSON"));

        let recommendation = service
            .get_recommendation(Disease::acute("Flu"), None)
            .await
            .expect("parse failure must not error");

        assert!(recommendation.foods_to_eat.is_empty());
        assert!(recommendation.foods_to_avoid.is_empty());
        let notes = recommendation.additional_notes.expect("fallback note");
        assert!(notes.contains("sorry, I cannot answer in JSON"));
    }

    #[tokio::test]
    async fn test_get_recommendation_propagates_provider_error() {
        let service = service_with_llm(failing_llm());
        let err = service
            .get_recommendation(Disease::chronic("Diabetes"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn test_analyze_condition_happy_path() {
        let reply = r#"{"status": "recovered", "message": "Keep it up."}"#;
        let service = service_with_llm(llm_returning(reply));

        let analysis = service.analyze_condition("Flu", "feeling much better").await;
        assert_eq!(analysis.status, FollowUpStatus::Recovered);
        assert_eq!(analysis.message, "Keep it up.");
    }

    #[tokio::test]
    async fn test_analyze_condition_defaults_on_provider_failure() {
        let service = service_with_llm(failing_llm());

        let analysis = service.analyze_condition("Flu", "worse").await;
        assert_eq!(analysis, ConditionAnalysis::doctor_fallback());
    }

    #[tokio::test]
    async fn test_analyze_condition_defaults_on_bad_json() {
        let service = service_with_llm(llm_returning("not json at all"));

        let analysis = service.analyze_condition("Flu", "worse").await;
        assert_eq!(analysis.status, FollowUpStatus::DoctorRequired);
    }

    #[tokio::test]
    async fn test_analyze_condition_missing_fields_default_to_monitoring() {
        let service = service_with_llm(llm_returning("{}"));

        let analysis = service.analyze_condition("Flu", "no change").await;
        assert_eq!(analysis.status, FollowUpStatus::Monitoring);
        assert_eq!(analysis.message, "Please consult a doctor.");
    }
}
