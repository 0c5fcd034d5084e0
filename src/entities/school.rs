//! `SeaORM` Entity for school table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "school"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub school_id: Uuid,
    pub school_name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    SchoolId,
    SchoolName,
    CreatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    SchoolId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    SchoolBadge,
    StudentApplication,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::SchoolId => ColumnType::Uuid.def(),
            Self::SchoolName => ColumnType::String(StringLen::None).def().unique(),
            Self::CreatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::has_many(super::student::Entity).into(),
            Self::SchoolBadge => Entity::has_many(super::school_badge::Entity).into(),
            Self::StudentApplication => Entity::has_many(super::student_application::Entity).into(),
        }
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::school_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolBadge.def()
    }
}

impl Related<super::student_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
