use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// Static referral directory entry, seeded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub phone_number: String,
    pub location: String,
    pub image_url: String,
}

impl Doctor {
    pub fn new(
        name: &str,
        specialization: &str,
        hospital: &str,
        phone_number: &str,
        location: &str,
        image_url: &str,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            name: name.to_string(),
            specialization: specialization.to_string(),
            hospital: hospital.to_string(),
            phone_number: phone_number.to_string(),
            location: location.to_string(),
            image_url: image_url.to_string(),
        }
    }
}
