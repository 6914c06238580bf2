use crate::{
    domain::disease::entities::{DiseaseEntry, DiseaseType},
    entity::diseases,
};

impl From<&diseases::Model> for DiseaseEntry {
    fn from(model: &diseases::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            disease_type: DiseaseType::from(model.disease_type.as_str()),
            category: model.category.clone(),
            severity: model.severity.clone(),
            description: model.description.clone(),
            dietary_restrictions: model.dietary_restrictions.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<diseases::Model> for DiseaseEntry {
    fn from(model: diseases::Model) -> Self {
        Self::from(&model)
    }
}
