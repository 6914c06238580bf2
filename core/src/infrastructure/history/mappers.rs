use crate::{
    domain::history::entities::{FollowUpEntry, FollowUpStatus, StoredCase},
    entity::{follow_ups, recommendations},
};

/// Deserializes a JSON text column holding an array of strings. Absent or
/// malformed columns map to an empty list.
pub(crate) fn food_list_from_column(column: Option<&str>) -> Vec<String> {
    column
        .and_then(|text| serde_json::from_str(text).ok())
        .unwrap_or_default()
}

/// Serializes a food list for storage; empty lists are stored as NULL.
pub(crate) fn food_list_to_column(list: &[String]) -> Option<String> {
    if list.is_empty() {
        return None;
    }
    serde_json::to_string(list).ok()
}

impl From<&recommendations::Model> for StoredCase {
    fn from(model: &recommendations::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            disease_id: model.disease_id,
            disease_name: model.disease_name.clone(),
            disease_type: model.disease_type.clone(),
            severity: model.severity.clone(),
            ai_provider: model.ai_provider.clone(),
            foods_to_eat: food_list_from_column(model.foods_to_eat.as_deref()),
            foods_to_avoid: food_list_from_column(model.foods_to_avoid.as_deref()),
            additional_notes: model.additional_notes.clone(),
            raw_response: model.raw_response.clone(),
            latest_feedback: model.latest_feedback.clone(),
            follow_up_status: FollowUpStatus::from(model.follow_up_status.as_str()),
            final_advice: model.final_advice.clone(),
            is_session_closed: model.is_session_closed,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recommendations::Model> for StoredCase {
    fn from(model: recommendations::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&follow_ups::Model> for FollowUpEntry {
    fn from(model: &follow_ups::Model) -> Self {
        Self {
            id: model.id,
            case_id: model.recommendation_id,
            user_condition: model.user_condition.clone(),
            user_notes: model.user_notes.clone(),
            ai_advice: model.ai_advice.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<follow_ups::Model> for FollowUpEntry {
    fn from(model: follow_ups::Model) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_food_list_round_trip() {
        let list = vec!["rice".to_string(), "banana".to_string()];
        let column = food_list_to_column(&list).expect("non-empty list serializes");
        assert_eq!(food_list_from_column(Some(&column)), list);
    }

    #[test]
    fn test_empty_list_stored_as_null() {
        assert_eq!(food_list_to_column(&[]), None);
        assert!(food_list_from_column(None).is_empty());
    }

    #[test]
    fn test_malformed_column_maps_to_empty_list() {
        assert!(food_list_from_column(Some("not json")).is_empty());
    }

    #[test]
    fn test_case_round_trip_preserves_order() {
        let model = recommendations::Model {
            id: Uuid::new_v4(),
            user_id: None,
            disease_id: None,
            disease_name: "Gastritis".to_string(),
            disease_type: Some("Chronic".to_string()),
            severity: Some("5".to_string()),
            ai_provider: Some("Google Gemini (gemini-2.5-flash)".to_string()),
            foods_to_eat: Some(r#"["rice","banana"]"#.to_string()),
            foods_to_avoid: None,
            additional_notes: None,
            raw_response: None,
            latest_feedback: None,
            follow_up_status: "MONITORING".to_string(),
            final_advice: None,
            is_session_closed: false,
            created_at: Utc::now().fixed_offset(),
        };

        let case = StoredCase::from(&model);
        assert_eq!(case.foods_to_eat, vec!["rice", "banana"]);
        assert!(case.foods_to_avoid.is_empty());
        assert_eq!(case.follow_up_status, FollowUpStatus::Monitoring);
    }
}
