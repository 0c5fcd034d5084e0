//! `SeaORM` Entity for leaderboard table

use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "leaderboard"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub leaderboard_id: Uuid,
    pub name: String,
    pub r#type: String,
    pub formula: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    LeaderboardId,
    Name,
    Type,
    Formula,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    LeaderboardId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    LeaderboardEntry,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::LeaderboardId => ColumnType::Uuid.def(),
            Self::Name => ColumnType::String(StringLen::None).def(),
            Self::Type => ColumnType::String(StringLen::N(50)).def(),
            Self::Formula => ColumnType::Text.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::LeaderboardEntry => Entity::has_many(super::leaderboard_entry::Entity).into(),
        }
    }
}

impl Related<super::leaderboard_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaderboardEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
