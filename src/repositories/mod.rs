pub mod application_repository;
pub mod badge_repository;
pub mod rating_repository;
pub mod school_repository;
pub mod session_repository;
pub mod student_repository;
pub mod user_repository;

pub use application_repository::ApplicationRepository;
pub use badge_repository::BadgeRepository;
pub use rating_repository::RatingRepository;
pub use school_repository::SchoolRepository;
pub use session_repository::SessionRepository;
pub use student_repository::{StudentRepository, StudentRow};
pub use user_repository::UserRepository;
