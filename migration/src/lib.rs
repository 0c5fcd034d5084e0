pub use sea_orm_migration::prelude::*;

mod m20260718_092145_create_table_user;
mod m20260718_104309_create_table_school_student;
mod m20260719_153012_create_table_rating;
mod m20260721_101548_create_table_badge;
mod m20260722_140237_create_table_leaderboard;
mod m20260723_110915_create_table_application;
mod m20260724_134401_create_table_session;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260718_092145_create_table_user::Migration),
            Box::new(m20260718_104309_create_table_school_student::Migration),
            Box::new(m20260719_153012_create_table_rating::Migration),
            Box::new(m20260721_101548_create_table_badge::Migration),
            Box::new(m20260722_140237_create_table_leaderboard::Migration),
            Box::new(m20260723_110915_create_table_application::Migration),
            Box::new(m20260724_134401_create_table_session::Migration),
        ]
    }
}
