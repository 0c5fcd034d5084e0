//! `SeaORM` Entity modules

pub mod badge;
pub mod leaderboard;
pub mod leaderboard_entry;
pub mod rating;
pub mod rating_summary;
pub mod school;
pub mod school_application;
pub mod school_badge;
pub mod sea_orm_active_enums;
pub mod session;
pub mod student;
pub mod student_application;
pub mod student_badge;
pub mod user;
