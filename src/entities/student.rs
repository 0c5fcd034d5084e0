//! `SeaORM` Entity for student table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "student"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub student_id: Uuid,
    pub school_id: Uuid,
    pub name: String,
    pub grade: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    StudentId,
    SchoolId,
    Name,
    Grade,
    CreatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    StudentId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    School,
    Rating,
    RatingSummary,
    StudentBadge,
    LeaderboardEntry,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::StudentId => ColumnType::Uuid.def(),
            Self::SchoolId => ColumnType::Uuid.def(),
            Self::Name => ColumnType::String(StringLen::None).def(),
            Self::Grade => ColumnType::Integer.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::School => Entity::belongs_to(super::school::Entity)
                .from(Column::SchoolId)
                .to(super::school::Column::SchoolId)
                .into(),
            Self::Rating => Entity::has_many(super::rating::Entity).into(),
            Self::RatingSummary => Entity::has_one(super::rating_summary::Entity).into(),
            Self::StudentBadge => Entity::has_many(super::student_badge::Entity).into(),
            Self::LeaderboardEntry => Entity::has_many(super::leaderboard_entry::Entity).into(),
        }
    }
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl Related<super::rating_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RatingSummary.def()
    }
}

impl Related<super::student_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentBadge.def()
    }
}

impl Related<super::leaderboard_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaderboardEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
