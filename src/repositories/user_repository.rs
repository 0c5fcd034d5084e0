use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::user;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find_by_id(user_id).one(db).await?;
        Ok(user)
    }

    pub async fn account_exists(&self, account: &str) -> Result<bool> {
        let db = self.get_connection();
        let count = user::Entity::find()
            .filter(user::Column::Account.eq(account))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    // Passwords are stored and compared as plain text
    pub async fn find_by_credentials(
        &self,
        account: &str,
        password: &str,
    ) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find()
            .filter(user::Column::Account.eq(account))
            .filter(user::Column::Password.eq(password))
            .one(db)
            .await?;
        Ok(user)
    }

    pub async fn create(
        &self,
        account: String,
        password: String,
        role: RoleEnum,
    ) -> Result<user::Model> {
        let db = self.get_connection();
        let user_model = user::ActiveModel {
            user_id: Set(Uuid::new_v4()),
            account: Set(account),
            password: Set(password),
            role: Set(role),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let result = user_model.insert(db).await?;
        Ok(result)
    }
}
