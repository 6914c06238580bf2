use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        disease::{
            entities::{DiseaseEntry, DiseaseType},
            ports::DiseaseRepository,
        },
    },
    entity::diseases::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDiseaseRepository {
    pub db: DatabaseConnection,
}

impl PostgresDiseaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DiseaseRepository for PostgresDiseaseRepository {
    async fn list(&self) -> Result<Vec<DiseaseEntry>, CoreError> {
        let entries = Entity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list disease entries: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(DiseaseEntry::from)
            .collect();

        Ok(entries)
    }

    async fn count_by_type(&self, disease_type: DiseaseType) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::DiseaseType.eq(disease_type.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count disease entries: {}", e);
                CoreError::InternalServerError
            })
    }
}
