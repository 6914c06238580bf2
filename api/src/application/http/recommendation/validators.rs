use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "disease_name must be between 1 and 200 characters"
    ))]
    pub disease_name: String,

    /// `"ACUTE"` or `"CHRONIC"`; anything else falls back to chronic.
    pub disease_type: Option<String>,

    pub severity: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DetailedRecommendRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "disease_name must be between 1 and 200 characters"
    ))]
    pub disease_name: String,

    pub disease_type: Option<String>,

    pub severity: Option<String>,

    /// Acute-only override, ignored for chronic diseases.
    #[validate(range(min = 1, max = 365, message = "recovery_days must be 1-365"))]
    pub recovery_days: Option<i32>,

    /// Chronic-only override, ignored for acute diseases.
    #[validate(length(max = 200))]
    pub management_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "condition must be between 1 and 2000 characters"
    ))]
    pub condition: String,

    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_disease_name_rejected() {
        let request = RecommendRequest {
            disease_name: String::new(),
            disease_type: None,
            severity: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_recovery_days_range() {
        let request = DetailedRecommendRequest {
            disease_name: "Flu".to_string(),
            disease_type: Some("ACUTE".to_string()),
            severity: None,
            recovery_days: Some(0),
            management_type: None,
        };
        assert!(request.validate().is_err());
    }
}
