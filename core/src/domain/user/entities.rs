use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Option<String>,
    pub is_active: bool,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub allergies: Option<String>,
    pub medical_history: Option<String>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    #[serde(skip)]
    pub profile_image: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Renders the health profile as a prompt fragment. Missing attributes fall
    /// back to neutral placeholders so the model is never fed `null`.
    pub fn profile_summary(&self) -> String {
        format!(
            "Patient Profile: [Age: {}, Gender: {}, Weight: {} kg, Height: {} cm, Allergies: {}, Medical History: {}].",
            self.age.map_or("Unknown".to_string(), |v| v.to_string()),
            self.gender.as_deref().unwrap_or("Unknown"),
            self.weight.map_or("-".to_string(), |v| v.to_string()),
            self.height.map_or("-".to_string(), |v| v.to_string()),
            self.allergies.as_deref().unwrap_or("None"),
            self.medical_history.as_deref().unwrap_or("None"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_user() -> User {
        User {
            id: Uuid::nil(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            role: None,
            is_active: true,
            age: None,
            gender: None,
            height: None,
            weight: None,
            allergies: None,
            medical_history: None,
            full_name: None,
            phone_number: None,
            profile_image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn test_profile_summary_placeholders() {
        let summary = bare_user().profile_summary();
        assert!(summary.contains("Age: Unknown"));
        assert!(summary.contains("Allergies: None"));
    }

    #[test]
    fn test_profile_summary_with_attributes() {
        let mut user = bare_user();
        user.age = Some(25);
        user.allergies = Some("Seafood".to_string());
        let summary = user.profile_summary();
        assert!(summary.contains("Age: 25"));
        assert!(summary.contains("Allergies: Seafood"));
    }
}
