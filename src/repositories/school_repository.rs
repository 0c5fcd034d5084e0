use crate::entities::school;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

pub struct SchoolRepository;

impl SchoolRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<school::Model>> {
        let db = self.get_connection();
        let schools = school::Entity::find()
            .order_by_asc(school::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(schools)
    }

    pub async fn find_by_id(&self, school_id: Uuid) -> Result<Option<school::Model>> {
        let db = self.get_connection();
        let school = school::Entity::find_by_id(school_id).one(db).await?;
        Ok(school)
    }
}
