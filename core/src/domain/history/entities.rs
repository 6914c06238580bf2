use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;
use crate::domain::recommendation::entities::FoodRecommendation;

/// Follow-up state of a stored case. New feedback moves Monitoring to either
/// terminal-leaning state; a closed session accepts no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FollowUpStatus {
    Monitoring,
    Recovered,
    DoctorRequired,
}

impl FollowUpStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FollowUpStatus::Monitoring => "MONITORING",
            FollowUpStatus::Recovered => "RECOVERED",
            FollowUpStatus::DoctorRequired => "DOCTOR_REQUIRED",
        }
    }
}

impl From<&str> for FollowUpStatus {
    fn from(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "RECOVERED" => FollowUpStatus::Recovered,
            "DOCTOR_REQUIRED" => FollowUpStatus::DoctorRequired,
            _ => FollowUpStatus::Monitoring,
        }
    }
}

/// Persisted recommendation record, the unit users browse as history.
/// Immutable once saved except for the follow-up bookkeeping fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredCase {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub disease_id: Option<Uuid>,
    pub disease_name: String,
    pub disease_type: Option<String>,
    pub severity: Option<String>,
    pub ai_provider: Option<String>,
    pub foods_to_eat: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub additional_notes: Option<String>,
    pub raw_response: Option<String>,
    pub latest_feedback: Option<String>,
    pub follow_up_status: FollowUpStatus,
    pub final_advice: Option<String>,
    pub is_session_closed: bool,
    pub created_at: DateTime<Utc>,
}

impl StoredCase {
    pub fn from_recommendation(
        recommendation: &FoodRecommendation,
        user_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            user_id,
            disease_id: None,
            disease_name: recommendation.disease.name.clone(),
            disease_type: Some(recommendation.disease.category().to_string()),
            severity: Some(recommendation.disease.severity.clone()),
            ai_provider: Some(recommendation.ai_provider.clone()),
            foods_to_eat: recommendation.foods_to_eat.clone(),
            foods_to_avoid: recommendation.foods_to_avoid.clone(),
            additional_notes: recommendation.additional_notes.clone(),
            raw_response: recommendation.raw_response.clone(),
            latest_feedback: None,
            follow_up_status: FollowUpStatus::Monitoring,
            final_advice: None,
            is_session_closed: false,
            created_at: recommendation.created_at,
        }
    }

    /// Records one feedback exchange on the case.
    pub fn apply_feedback(&mut self, feedback: &str, status: FollowUpStatus, advice: &str) {
        self.latest_feedback = Some(feedback.to_string());
        self.follow_up_status = status;
        self.final_advice = Some(advice.to_string());
    }
}

/// One feedback/advice exchange on a stored case's timeline. Never mutated
/// after creation; deleted only by cascade from the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpEntry {
    pub id: Uuid,
    pub case_id: Uuid,
    pub user_condition: Option<String>,
    pub user_notes: Option<String>,
    pub ai_advice: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FollowUpEntry {
    pub fn new(
        case_id: Uuid,
        user_condition: Option<String>,
        user_notes: Option<String>,
        ai_advice: Option<String>,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            case_id,
            user_condition,
            user_notes,
            ai_advice,
            created_at: Utc::now(),
        }
    }
}

/// One page of case history, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CasePage {
    pub content: Vec<StoredCase>,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl CasePage {
    pub fn pages_for(total_elements: u64, size: u64) -> u64 {
        if size == 0 {
            return 0;
        }
        total_elements.div_ceil(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_for_rounds_up() {
        assert_eq!(CasePage::pages_for(25, 10), 3);
        assert_eq!(CasePage::pages_for(20, 10), 2);
        assert_eq!(CasePage::pages_for(0, 10), 0);
        assert_eq!(CasePage::pages_for(1, 10), 1);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(FollowUpStatus::from("recovered"), FollowUpStatus::Recovered);
        assert_eq!(
            FollowUpStatus::from("DOCTOR_REQUIRED"),
            FollowUpStatus::DoctorRequired
        );
        assert_eq!(FollowUpStatus::from("garbage"), FollowUpStatus::Monitoring);
        assert_eq!(FollowUpStatus::DoctorRequired.as_str(), "DOCTOR_REQUIRED");
    }
}
