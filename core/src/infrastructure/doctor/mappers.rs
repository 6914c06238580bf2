use crate::{domain::doctor::entities::Doctor, entity::doctors};

impl From<&doctors::Model> for Doctor {
    fn from(model: &doctors::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            specialization: model.specialization.clone(),
            hospital: model.hospital.clone(),
            phone_number: model.phone_number.clone(),
            location: model.location.clone(),
            image_url: model.image_url.clone(),
        }
    }
}

impl From<doctors::Model> for Doctor {
    fn from(model: doctors::Model) -> Self {
        Self::from(&model)
    }
}
