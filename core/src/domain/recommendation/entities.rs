use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{disease::entities::Disease, history::entities::FollowUpStatus};

/// Structured dietary advice for one disease, produced by the pipeline and
/// persisted by the history service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecommendation {
    pub disease: Disease,
    pub ai_provider: String,
    pub foods_to_eat: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub additional_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FoodRecommendation {
    pub fn new(disease: Disease, ai_provider: String) -> Self {
        Self {
            disease,
            ai_provider,
            foods_to_eat: Vec::new(),
            foods_to_avoid: Vec::new(),
            additional_notes: None,
            raw_response: None,
            created_at: Utc::now(),
        }
    }
}

/// Classification of a free-text patient update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionAnalysis {
    pub status: FollowUpStatus,
    pub message: String,
}

impl ConditionAnalysis {
    /// Fail-safe default used whenever analysis cannot complete: bias toward
    /// caution rather than failing the request.
    pub fn doctor_fallback() -> Self {
        Self {
            status: FollowUpStatus::DoctorRequired,
            message: "System cannot analyze. Consult a doctor.".to_string(),
        }
    }
}
