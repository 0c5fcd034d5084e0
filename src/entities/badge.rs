//! `SeaORM` Entity for badge table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::BadgeTypeEnum;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "badge"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub badge_id: Uuid,
    pub name: String,
    pub description: String,
    pub badge_type: BadgeTypeEnum,
    pub rule_desc: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    BadgeId,
    Name,
    Description,
    BadgeType,
    RuleDesc,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    BadgeId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    StudentBadge,
    SchoolBadge,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::BadgeId => ColumnType::Uuid.def(),
            Self::Name => ColumnType::String(StringLen::None).def(),
            Self::Description => ColumnType::Text.def(),
            Self::BadgeType => BadgeTypeEnum::db_type(),
            Self::RuleDesc => ColumnType::Text.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::StudentBadge => Entity::has_many(super::student_badge::Entity).into(),
            Self::SchoolBadge => Entity::has_many(super::school_badge::Entity).into(),
        }
    }
}

impl Related<super::student_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentBadge.def()
    }
}

impl Related<super::school_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolBadge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
