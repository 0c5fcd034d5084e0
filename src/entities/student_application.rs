//! `SeaORM` Entity for student_application table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ApplicationStatusEnum;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "student_application"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub application_id: Uuid,
    pub applicant_id: Uuid,
    pub student_name: String,
    pub school_id: Uuid,
    pub grade: i32,
    pub reason: String,
    pub status: ApplicationStatusEnum,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    ApplicationId,
    ApplicantId,
    StudentName,
    SchoolId,
    Grade,
    Reason,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    ApplicationId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Applicant,
    School,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::ApplicationId => ColumnType::Uuid.def(),
            Self::ApplicantId => ColumnType::Uuid.def(),
            Self::StudentName => ColumnType::String(StringLen::None).def(),
            Self::SchoolId => ColumnType::Uuid.def(),
            Self::Grade => ColumnType::Integer.def(),
            Self::Reason => ColumnType::Text.def(),
            Self::Status => ApplicationStatusEnum::db_type(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Applicant => Entity::belongs_to(super::user::Entity)
                .from(Column::ApplicantId)
                .to(super::user::Column::UserId)
                .into(),
            Self::School => Entity::belongs_to(super::school::Entity)
                .from(Column::SchoolId)
                .to(super::school::Column::SchoolId)
                .into(),
        }
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applicant.def()
    }
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
