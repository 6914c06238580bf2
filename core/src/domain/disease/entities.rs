use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

pub const DEFAULT_RECOVERY_DAYS: i32 = 7;
pub const DEFAULT_MANAGEMENT_TYPE: &str = "Lifestyle and Diet";

/// In-memory disease model driving prompt construction. Only its name and
/// category propagate into the stored case; the variant payload feeds the
/// prompt text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Disease {
    pub name: String,
    pub severity: String,
    #[serde(flatten)]
    pub kind: DiseaseKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "category")]
pub enum DiseaseKind {
    Acute {
        expected_recovery_days: i32,
        requires_immediate_care: bool,
    },
    Chronic {
        management_type: String,
        requires_long_term_management: bool,
    },
}

impl Disease {
    pub fn acute(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity: "Unknown".to_string(),
            kind: DiseaseKind::Acute {
                expected_recovery_days: DEFAULT_RECOVERY_DAYS,
                requires_immediate_care: false,
            },
        }
    }

    pub fn chronic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity: "Unknown".to_string(),
            kind: DiseaseKind::Chronic {
                management_type: DEFAULT_MANAGEMENT_TYPE.to_string(),
                requires_long_term_management: true,
            },
        }
    }

    /// Builds the variant matching the type discriminator, defaulting to
    /// chronic for anything other than `"acute"`.
    pub fn from_type(name: impl Into<String>, disease_type: &str) -> Self {
        if disease_type.eq_ignore_ascii_case("acute") {
            Self::acute(name)
        } else {
            Self::chronic(name)
        }
    }

    pub fn category(&self) -> &'static str {
        match self.kind {
            DiseaseKind::Acute { .. } => "Acute",
            DiseaseKind::Chronic { .. } => "Chronic",
        }
    }

    pub fn description(&self) -> String {
        match &self.kind {
            DiseaseKind::Acute {
                expected_recovery_days,
                ..
            } => format!(
                "Acute condition with expected recovery in {} days: {}",
                expected_recovery_days, self.name
            ),
            DiseaseKind::Chronic { .. } => format!(
                "Chronic condition requiring long-term management: {}",
                self.name
            ),
        }
    }

    pub fn dietary_restrictions(&self) -> &'static str {
        match self.kind {
            DiseaseKind::Acute { .. } => "Temporary dietary modifications during recovery period.",
            DiseaseKind::Chronic { .. } => {
                "Long-term dietary modifications recommended for chronic condition management."
            }
        }
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    /// Applies the acute-only override; a no-op on chronic diseases.
    pub fn with_recovery_days(mut self, days: i32) -> Self {
        if let DiseaseKind::Acute {
            expected_recovery_days,
            ..
        } = &mut self.kind
        {
            *expected_recovery_days = days;
        }
        self
    }

    /// Applies the chronic-only override; a no-op on acute diseases.
    pub fn with_management_type(mut self, management: impl Into<String>) -> Self {
        if let DiseaseKind::Chronic {
            management_type, ..
        } = &mut self.kind
        {
            *management_type = management.into();
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiseaseType {
    Acute,
    Chronic,
}

impl DiseaseType {
    pub fn as_str(&self) -> &str {
        match self {
            DiseaseType::Acute => "ACUTE",
            DiseaseType::Chronic => "CHRONIC",
        }
    }
}

impl From<&str> for DiseaseType {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("acute") {
            DiseaseType::Acute
        } else {
            DiseaseType::Chronic
        }
    }
}

/// Persisted disease-dictionary entry, created the first time a disease name is
/// recommended. A cache of descriptive text, not required for correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiseaseEntry {
    pub id: Uuid,
    pub name: String,
    pub disease_type: DiseaseType,
    pub category: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiseaseEntry {
    pub fn from_disease(disease: &Disease) -> Self {
        let now = Utc::now();
        Self {
            id: generate_uuid_v7(),
            name: disease.name.clone(),
            disease_type: disease.category().into(),
            category: Some(disease.category().to_string()),
            severity: Some(disease.severity.clone()),
            description: Some(disease.description()),
            dietary_restrictions: Some(disease.dietary_restrictions().to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acute_defaults() {
        let disease = Disease::acute("Flu");
        assert_eq!(disease.severity, "Unknown");
        assert_eq!(
            disease.kind,
            DiseaseKind::Acute {
                expected_recovery_days: 7,
                requires_immediate_care: false,
            }
        );
        assert_eq!(disease.category(), "Acute");
    }

    #[test]
    fn test_chronic_defaults() {
        let disease = Disease::chronic("Diabetes");
        assert_eq!(
            disease.kind,
            DiseaseKind::Chronic {
                management_type: "Lifestyle and Diet".to_string(),
                requires_long_term_management: true,
            }
        );
    }

    #[test]
    fn test_from_type_defaults_to_chronic() {
        assert_eq!(Disease::from_type("Gastritis", "weird").category(), "Chronic");
        assert_eq!(Disease::from_type("Flu", "ACUTE").category(), "Acute");
    }

    #[test]
    fn test_variant_overrides_ignore_wrong_kind() {
        let disease = Disease::chronic("Diabetes").with_recovery_days(3);
        assert_eq!(
            disease.kind,
            DiseaseKind::Chronic {
                management_type: "Lifestyle and Diet".to_string(),
                requires_long_term_management: true,
            }
        );

        let disease = Disease::acute("Flu").with_recovery_days(3);
        match disease.kind {
            DiseaseKind::Acute {
                expected_recovery_days,
                ..
            } => assert_eq!(expected_recovery_days, 3),
            _ => panic!("expected acute variant"),
        }
    }

    #[test]
    fn test_description_mentions_recovery_days() {
        let disease = Disease::acute("Flu").with_recovery_days(10);
        assert_eq!(
            disease.description(),
            "Acute condition with expected recovery in 10 days: Flu"
        );
    }
}
