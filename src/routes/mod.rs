pub mod applications;
pub mod auth;
pub mod badges;
pub mod health;
pub mod leaderboard;
pub mod ratings;
pub mod schools;
pub mod students;
