use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, Func},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        disease::entities::DiseaseEntry,
        history::{
            entities::{CasePage, StoredCase},
            ports::CaseRepository,
        },
    },
    entity::{
        diseases::{
            ActiveModel as DiseaseActiveModel, Column as DiseaseColumn, Entity as DiseaseEntity,
        },
        recommendations::{ActiveModel as CaseActiveModel, Column as CaseColumn, Entity as CaseEntity},
    },
    infrastructure::history::mappers::food_list_to_column,
};

#[derive(Debug, Clone)]
pub struct PostgresCaseRepository {
    pub db: DatabaseConnection,
}

impl PostgresCaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn case_active_model(case: &StoredCase) -> CaseActiveModel {
    CaseActiveModel {
        id: Set(case.id),
        user_id: Set(case.user_id),
        disease_id: Set(case.disease_id),
        disease_name: Set(case.disease_name.clone()),
        disease_type: Set(case.disease_type.clone()),
        severity: Set(case.severity.clone()),
        ai_provider: Set(case.ai_provider.clone()),
        foods_to_eat: Set(food_list_to_column(&case.foods_to_eat)),
        foods_to_avoid: Set(food_list_to_column(&case.foods_to_avoid)),
        additional_notes: Set(case.additional_notes.clone()),
        raw_response: Set(case.raw_response.clone()),
        latest_feedback: Set(case.latest_feedback.clone()),
        follow_up_status: Set(case.follow_up_status.as_str().to_string()),
        final_advice: Set(case.final_advice.clone()),
        is_session_closed: Set(case.is_session_closed),
        created_at: Set(case.created_at.fixed_offset()),
    }
}

impl CaseRepository for PostgresCaseRepository {
    async fn create_with_dictionary(
        &self,
        mut case: StoredCase,
        dictionary: DiseaseEntry,
    ) -> Result<StoredCase, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let existing = DiseaseEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(DiseaseColumn::Name)))
                    .eq(dictionary.name.to_lowercase()),
            )
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to look up disease dictionary: {}", e);
                CoreError::InternalServerError
            })?;

        let disease_id = match existing {
            Some(model) => model.id,
            None => {
                let created = DiseaseEntity::insert(DiseaseActiveModel {
                    id: Set(dictionary.id),
                    name: Set(dictionary.name.clone()),
                    disease_type: Set(dictionary.disease_type.as_str().to_string()),
                    category: Set(dictionary.category.clone()),
                    severity: Set(dictionary.severity.clone()),
                    description: Set(dictionary.description.clone()),
                    dietary_restrictions: Set(dictionary.dietary_restrictions.clone()),
                    created_at: Set(dictionary.created_at.fixed_offset()),
                    updated_at: Set(dictionary.updated_at.fixed_offset()),
                })
                .exec_with_returning(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create disease dictionary entry: {}", e);
                    CoreError::InternalServerError
                })?;
                created.id
            }
        };

        case.disease_id = Some(disease_id);

        let created = CaseEntity::insert(case_active_model(&case))
            .exec_with_returning(&txn)
            .await
            .map(StoredCase::from)
            .map_err(|e| {
                error!("Failed to create stored case: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit case transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, case_id: Uuid) -> Result<Option<StoredCase>, CoreError> {
        let case = CaseEntity::find_by_id(case_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get stored case: {}", e);
                CoreError::InternalServerError
            })?
            .map(StoredCase::from);

        Ok(case)
    }

    async fn delete(&self, case_id: Uuid) -> Result<(), CoreError> {
        let result = CaseEntity::delete_by_id(case_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete stored case: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn find_page(
        &self,
        owner_id: Option<Uuid>,
        page: u64,
        size: u64,
    ) -> Result<CasePage, CoreError> {
        let mut query = CaseEntity::find();
        if let Some(owner_id) = owner_id {
            query = query.filter(CaseColumn::UserId.eq(owner_id));
        }

        let total_elements = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count stored cases: {}", e);
            CoreError::InternalServerError
        })?;

        let content = query
            .order_by_desc(CaseColumn::CreatedAt)
            .offset(page.saturating_mul(size))
            .limit(size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch case page: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(StoredCase::from)
            .collect();

        Ok(CasePage {
            content,
            total_elements,
            total_pages: CasePage::pages_for(total_elements, size),
        })
    }

    async fn search_by_disease_name(&self, keyword: &str) -> Result<Vec<StoredCase>, CoreError> {
        let pattern = format!("%{}%", keyword.to_lowercase());

        let cases = CaseEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(CaseColumn::DiseaseName))).like(pattern))
            .order_by_desc(CaseColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search stored cases: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(StoredCase::from)
            .collect();

        Ok(cases)
    }

    async fn update_follow_up_fields(&self, case: StoredCase) -> Result<StoredCase, CoreError> {
        let updated = CaseEntity::update(CaseActiveModel {
            id: Set(case.id),
            latest_feedback: Set(case.latest_feedback.clone()),
            follow_up_status: Set(case.follow_up_status.as_str().to_string()),
            final_advice: Set(case.final_advice.clone()),
            is_session_closed: Set(case.is_session_closed),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .map(StoredCase::from)
        .map_err(|e| {
            error!("Failed to update follow-up fields: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }
}
