use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::config::SESSION_COOKIE_NAME;
use crate::entities::sea_orm_active_enums::{ApplicationStatusEnum, BadgeTypeEnum, RoleEnum};
use crate::routes;

struct SessionCookieSecurity;

impl Modify for SessionCookieSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE_NAME))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::route::health,
        routes::auth::route::register,
        routes::auth::route::login,
        routes::auth::route::logout,
        routes::auth::route::check,
        routes::schools::route::list_schools,
        routes::students::route::list_students,
        routes::students::route::get_student,
        routes::students::route::list_student_ratings,
        routes::ratings::route::list_given_ratings,
        routes::ratings::route::submit_rating,
        routes::leaderboard::route::get_leaderboard,
        routes::badges::route::list_badges,
        routes::badges::route::list_student_badges,
        routes::applications::route::list_school_applications,
        routes::applications::route::create_school_application,
        routes::applications::route::decide_school_application,
        routes::applications::route::list_student_applications,
        routes::applications::route::create_student_application,
        routes::applications::route::decide_student_application,
    ),
    components(schemas(
        routes::auth::dto::RegisterRequest,
        routes::auth::dto::LoginRequest,
        routes::auth::dto::UserPayload,
        routes::schools::dto::SchoolResponse,
        routes::students::dto::StudentResponse,
        routes::students::dto::ReceivedRatingResponse,
        routes::ratings::dto::SubmitRatingRequest,
        routes::ratings::dto::GivenRatingResponse,
        routes::ratings::dto::SubmitRatingResponse,
        routes::leaderboard::dto::RankedStudentResponse,
        routes::leaderboard::dto::SchoolStandingResponse,
        routes::badges::dto::BadgeResponse,
        routes::badges::dto::StudentBadgeResponse,
        routes::applications::dto::CreateSchoolApplicationRequest,
        routes::applications::dto::CreateStudentApplicationRequest,
        routes::applications::dto::DecideApplicationRequest,
        routes::applications::dto::SchoolApplicationResponse,
        routes::applications::dto::StudentApplicationResponse,
        routes::applications::dto::ApplicationCreatedResponse,
        routes::applications::dto::ApplicationDecisionResponse,
        RoleEnum,
        ApplicationStatusEnum,
        BadgeTypeEnum,
    )),
    modifiers(&SessionCookieSecurity),
    tags(
        (name = "Authentication", description = "Registration and session management"),
        (name = "Schools", description = "School directory"),
        (name = "Students", description = "Student directory and received ratings"),
        (name = "Ratings", description = "Rating submission and history"),
        (name = "Leaderboard", description = "Student and school standings"),
        (name = "Badges", description = "Badge catalogue and awards"),
        (name = "Applications", description = "School and student onboarding workflow"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
