use crate::domain::{disease::entities::Disease, user::entities::User};

/// Builds the nutritionist prompt. The diagnosis line carries the disease name,
/// severity and variant description; the patient profile is appended when the
/// caller is authenticated.
pub fn build_recommendation_prompt(disease: &Disease, patient: Option<&User>) -> String {
    let profile = patient
        .map(|user| format!(" {}", user.profile_summary()))
        .unwrap_or_default();

    format!(
        "You are a nutritionist AI. Patient diagnosis: {} (Severity Level: {}/10). {}.{profile} \
         Provide dietary recommendations in STRICT JSON format. \
         NO Markdown, NO ```json wrappers. Just raw JSON.\n\n\
         JSON Structure:\n\
         {{ \"foodsToEat\": [\"item1\", \"item2\", \"item3\"], \
         \"foodsToAvoid\": [\"item1\", \"item2\", \"item3\"], \
         \"additionalNotes\": \"Brief explanation\" }}",
        disease.name,
        disease.severity,
        disease.description(),
    )
}

pub fn build_follow_up_prompt(disease_name: &str, feedback: &str) -> String {
    format!(
        "You are a medical assistant. A patient diagnosed with '{disease_name}' \
         reported this follow-up condition: '{feedback}'.\n\n\
         Analyze if they need a doctor immediately or if they are recovering.\n\
         Return STRICT JSON ONLY (No Markdown):\n\
         {{\n\
           \"status\": \"RECOVERED\" (if getting better) OR \"DOCTOR_REQUIRED\" (if worse/critical) OR \"MONITORING\" (if neutral),\n\
           \"message\": \"Your short advice (max 2 sentences)\"\n\
         }}"
    )
}

/// Strips a Markdown code-fence wrapper (```` ```json ```` or plain ```` ``` ````)
/// from a model reply. A no-op on already-clean text, so it is safe to apply
/// unconditionally.
pub fn strip_code_fences(text: &str) -> String {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fence() {
        let raw = "```json\n{\"foodsToEat\": []}\n```";
        assert_eq!(strip_code_fences(raw), "{\"foodsToEat\": []}");
    }

    #[test]
    fn test_strip_plain_fence() {
        let raw = "```\n{\"a\":1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\":1}");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let clean = "{\"foodsToEat\": [\"rice\"]}";
        let once = strip_code_fences(clean);
        assert_eq!(once, clean);
        assert_eq!(strip_code_fences(&once), clean);
    }

    #[test]
    fn test_recommendation_prompt_mentions_profile_when_present() {
        use chrono::Utc;
        use uuid::Uuid;

        let disease = crate::domain::disease::entities::Disease::chronic("Diabetes")
            .with_severity("8");
        let user = crate::domain::user::entities::User {
            id: Uuid::nil(),
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: String::new(),
            role: None,
            is_active: true,
            age: Some(40),
            gender: Some("Male".to_string()),
            height: None,
            weight: None,
            allergies: Some("Peanuts".to_string()),
            medical_history: None,
            full_name: None,
            phone_number: None,
            profile_image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login: None,
        };

        let prompt = build_recommendation_prompt(&disease, Some(&user));
        assert!(prompt.contains("Diabetes (Severity Level: 8/10)"));
        assert!(prompt.contains("Allergies: Peanuts"));
        assert!(prompt.contains("foodsToEat"));

        let anonymous = build_recommendation_prompt(&disease, None);
        assert!(!anonymous.contains("Patient Profile"));
    }
}
