use crate::entities::{session, user};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

pub struct SessionRepository;

impl SessionRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn create(&self, user_id: Uuid, ttl_seconds: i64) -> Result<session::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let session_model = session::ActiveModel {
            session_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            created_at: Set(now),
            expires_at: Set(now + chrono::Duration::seconds(ttl_seconds)),
        };

        let result = session_model.insert(db).await?;
        Ok(result)
    }

    /// Resolve a session id to its user, ignoring expired sessions.
    /// Expired rows stay in place; they are only ever filtered on read.
    pub async fn find_valid_with_user(
        &self,
        session_id: Uuid,
    ) -> Result<Option<(session::Model, user::Model)>> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let found = session::Entity::find_by_id(session_id)
            .filter(session::Column::ExpiresAt.gt(now))
            .find_also_related(user::Entity)
            .one(db)
            .await?;

        Ok(found.and_then(|(session, user)| user.map(|user| (session, user))))
    }

    pub async fn delete(&self, session_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = session::Entity::delete_by_id(session_id).exec(db).await?;
        Ok(result)
    }
}
