use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    disease::entities::Disease,
    recommendation::entities::{ConditionAnalysis, FoodRecommendation},
    user::entities::User,
};

/// LLM client trait: one provider adapter per backend, selected at assembly.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Implementation/model identifier stamped on every recommendation.
    fn provider_label(&self) -> String;
}

/// Service trait for the disease-to-recommendation pipeline
pub trait RecommendationService: Send + Sync {
    fn get_recommendation(
        &self,
        disease: Disease,
        patient: Option<&User>,
    ) -> impl Future<Output = Result<FoodRecommendation, CoreError>> + Send;

    /// Classifies a follow-up report. Infallible by design: any provider or
    /// parse failure degrades to the cautious doctor-required default.
    fn analyze_condition(
        &self,
        disease_name: &str,
        feedback: &str,
    ) -> impl Future<Output = ConditionAnalysis> + Send;
}
