use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::ApplicationStatusEnum;
use crate::error::ApiError;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ApplicationQueryParams {
    /// Optional filter, one of `pending`, `approved`, `rejected`
    pub status: Option<String>,
    pub applicant_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSchoolApplicationRequest {
    pub applicant_id: Option<Uuid>,

    #[schema(example = "Northlake High")]
    pub school_name: Option<String>,

    #[schema(example = "office@northlake.example")]
    pub contact: Option<String>,

    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentApplicationRequest {
    pub applicant_id: Option<Uuid>,

    #[schema(example = "Riley Shaw")]
    pub student_name: Option<String>,

    pub school_id: Option<Uuid>,

    #[schema(example = 2024)]
    pub grade: Option<i32>,

    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DecideApplicationRequest {
    #[schema(example = "approved")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SchoolApplicationResponse {
    pub application_id: String,
    pub applicant_id: String,
    pub school_name: String,
    pub contact: String,
    pub reason: String,
    pub status: ApplicationStatusEnum,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentApplicationResponse {
    pub application_id: String,
    pub applicant_id: String,
    pub student_name: String,
    pub school_id: String,
    pub school_name: String,
    pub grade: i32,
    pub reason: String,
    pub status: ApplicationStatusEnum,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApplicationCreatedResponse {
    pub application_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApplicationDecisionResponse {
    pub application_id: String,
    pub status: ApplicationStatusEnum,
}

/// Maps the three accepted state strings onto the enum, anything else is
/// a validation error.
pub fn parse_status(value: &str) -> Result<ApplicationStatusEnum, ApiError> {
    match value {
        "pending" => Ok(ApplicationStatusEnum::Pending),
        "approved" => Ok(ApplicationStatusEnum::Approved),
        "rejected" => Ok(ApplicationStatusEnum::Rejected),
        _ => Err(ApiError::Validation("invalid status".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_accepts_known_states() {
        assert_eq!(
            parse_status("pending").unwrap(),
            ApplicationStatusEnum::Pending
        );
        assert_eq!(
            parse_status("approved").unwrap(),
            ApplicationStatusEnum::Approved
        );
        assert_eq!(
            parse_status("rejected").unwrap(),
            ApplicationStatusEnum::Rejected
        );
    }

    #[test]
    fn test_parse_status_rejects_anything_else() {
        assert!(matches!(
            parse_status("cancelled"),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(parse_status(""), Err(ApiError::Validation(_))));
        assert!(matches!(
            parse_status("Approved"),
            Err(ApiError::Validation(_))
        ));
    }
}
