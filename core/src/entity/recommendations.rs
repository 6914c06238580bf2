use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recommendations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub disease_id: Option<Uuid>,
    pub disease_name: String,
    pub disease_type: Option<String>,
    pub severity: Option<String>,
    pub ai_provider: Option<String>,
    /// JSON array of strings, serialized by the mapper.
    #[sea_orm(column_type = "Text", nullable)]
    pub foods_to_eat: Option<String>,
    /// JSON array of strings, serialized by the mapper.
    #[sea_orm(column_type = "Text", nullable)]
    pub foods_to_avoid: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub raw_response: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub latest_feedback: Option<String>,
    pub follow_up_status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub final_advice: Option<String>,
    pub is_session_closed: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::diseases::Entity",
        from = "Column::DiseaseId",
        to = "super::diseases::Column::Id"
    )]
    Disease,
    #[sea_orm(has_many = "super::follow_ups::Entity")]
    FollowUps,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::diseases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Disease.def()
    }
}

impl Related<super::follow_ups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FollowUps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
