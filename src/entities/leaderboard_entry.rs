//! `SeaORM` Entity for leaderboard_entry table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "leaderboard_entry"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub entry_id: Uuid,
    pub leaderboard_id: Uuid,
    pub student_id: Uuid,
    pub rank: i32,
    pub score_snapshot: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    EntryId,
    LeaderboardId,
    StudentId,
    Rank,
    ScoreSnapshot,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    EntryId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Leaderboard,
    Student,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::EntryId => ColumnType::Uuid.def(),
            Self::LeaderboardId => ColumnType::Uuid.def(),
            Self::StudentId => ColumnType::Uuid.def(),
            Self::Rank => ColumnType::Integer.def(),
            Self::ScoreSnapshot => ColumnType::Decimal(Some((4, 2))).def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Leaderboard => Entity::belongs_to(super::leaderboard::Entity)
                .from(Column::LeaderboardId)
                .to(super::leaderboard::Column::LeaderboardId)
                .into(),
            Self::Student => Entity::belongs_to(super::student::Entity)
                .from(Column::StudentId)
                .to(super::student::Column::StudentId)
                .into(),
        }
    }
}

impl Related<super::leaderboard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leaderboard.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
