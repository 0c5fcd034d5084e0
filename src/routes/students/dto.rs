use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::repositories::StudentRow;
use rust_decimal::prelude::ToPrimitive;

#[derive(Debug, Deserialize, IntoParams)]
pub struct StudentQueryParams {
    pub school_id: Option<Uuid>,
    pub grade: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub student_id: String,
    pub name: String,
    pub grade: i32,
    pub school_id: String,
    pub school_name: String,
    /// Two-decimal average, 0.0 until the first rating lands
    pub avg_score: f64,
    pub rating_count: i32,
}

impl From<StudentRow> for StudentResponse {
    fn from(row: StudentRow) -> Self {
        StudentResponse {
            student_id: row.student.student_id.to_string(),
            name: row.student.name,
            grade: row.student.grade,
            school_id: row.student.school_id.to_string(),
            school_name: row.school_name,
            avg_score: row.avg_score.to_f64().unwrap_or(0.0),
            rating_count: row.rating_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReceivedRatingResponse {
    pub rating_id: String,
    pub rater_id: String,
    pub rater_name: String,
    pub target_id: String,
    pub score: i16,
    pub comment: String,
    pub created_at: String,
}
