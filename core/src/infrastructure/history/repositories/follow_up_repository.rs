use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        history::{
            entities::{FollowUpEntry, StoredCase},
            ports::FollowUpRepository,
        },
    },
    entity::{
        follow_ups::{ActiveModel as EntryActiveModel, Column as EntryColumn, Entity as EntryEntity},
        recommendations::{ActiveModel as CaseActiveModel, Entity as CaseEntity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresFollowUpRepository {
    pub db: DatabaseConnection,
}

impl PostgresFollowUpRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FollowUpRepository for PostgresFollowUpRepository {
    async fn append(
        &self,
        case: StoredCase,
        entry: FollowUpEntry,
    ) -> Result<FollowUpEntry, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open follow-up transaction: {}", e);
            CoreError::InternalServerError
        })?;

        CaseEntity::update(CaseActiveModel {
            id: Set(case.id),
            latest_feedback: Set(case.latest_feedback.clone()),
            follow_up_status: Set(case.follow_up_status.as_str().to_string()),
            final_advice: Set(case.final_advice.clone()),
            is_session_closed: Set(case.is_session_closed),
            ..Default::default()
        })
        .exec(&txn)
        .await
        .map_err(|e| {
            error!("Failed to update parent case: {}", e);
            CoreError::InternalServerError
        })?;

        let created = EntryEntity::insert(EntryActiveModel {
            id: Set(entry.id),
            recommendation_id: Set(entry.case_id),
            user_condition: Set(entry.user_condition.clone()),
            user_notes: Set(entry.user_notes.clone()),
            ai_advice: Set(entry.ai_advice.clone()),
            created_at: Set(entry.created_at.fixed_offset()),
        })
        .exec_with_returning(&txn)
        .await
        .map(FollowUpEntry::from)
        .map_err(|e| {
            error!("Failed to create follow-up entry: {}", e);
            CoreError::InternalServerError
        })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit follow-up transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_case_id(&self, case_id: Uuid) -> Result<Vec<FollowUpEntry>, CoreError> {
        let entries = EntryEntity::find()
            .filter(EntryColumn::RecommendationId.eq(case_id))
            .order_by_desc(EntryColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch follow-up timeline: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(FollowUpEntry::from)
            .collect();

        Ok(entries)
    }
}
