use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            email: model.email.clone(),
            password_hash: model.password_hash.clone(),
            role: model.role.clone(),
            is_active: model.is_active,
            age: model.age,
            gender: model.gender.clone(),
            height: model.height,
            weight: model.weight,
            allergies: model.allergies.clone(),
            medical_history: model.medical_history.clone(),
            full_name: model.full_name.clone(),
            phone_number: model.phone_number.clone(),
            profile_image: model.profile_image.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
            last_login: model.last_login.map(|t| t.to_utc()),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
