use crate::entities::sea_orm_active_enums::BadgeTypeEnum;
use crate::entities::{badge, student_badge};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct BadgeRepository;

impl BadgeRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<badge::Model>> {
        let db = self.get_connection();
        let badges = badge::Entity::find()
            .order_by_asc(badge::Column::BadgeType)
            .order_by_asc(badge::Column::Name)
            .all(db)
            .await?;
        Ok(badges)
    }

    pub async fn find_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<(student_badge::Model, Option<badge::Model>)>> {
        let db = self.get_connection();
        let awards = student_badge::Entity::find()
            .filter(student_badge::Column::StudentId.eq(student_id))
            .find_also_related(badge::Entity)
            .all(db)
            .await?;
        Ok(awards)
    }

    pub async fn count(&self) -> Result<u64> {
        let db = self.get_connection();
        let count = badge::Entity::find().count(db).await?;
        Ok(count)
    }

    pub async fn create(
        &self,
        name: String,
        description: String,
        badge_type: BadgeTypeEnum,
        rule_desc: String,
    ) -> Result<badge::Model> {
        let db = self.get_connection();
        let badge_model = badge::ActiveModel {
            badge_id: Set(Uuid::new_v4()),
            name: Set(name),
            description: Set(description),
            badge_type: Set(badge_type),
            rule_desc: Set(rule_desc),
        };

        let result = badge_model.insert(db).await?;
        Ok(result)
    }
}
