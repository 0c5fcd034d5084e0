use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::ranking::{RankedStudent, SchoolStanding};
use rust_decimal::prelude::ToPrimitive;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQueryParams {
    /// `all` ranks individual students, `school` rolls the averages up
    /// per school
    #[serde(rename = "type", default = "default_leaderboard_type")]
    pub leaderboard_type: String,
}

fn default_leaderboard_type() -> String {
    "all".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RankedStudentResponse {
    pub student_id: String,
    pub name: String,
    pub grade: i32,
    pub school_id: String,
    pub school_name: String,
    pub avg_score: f64,
    pub rating_count: i32,
    /// Sequential position from 1, ties keep distinct ranks
    pub rank: u32,
}

impl From<RankedStudent> for RankedStudentResponse {
    fn from(entry: RankedStudent) -> Self {
        RankedStudentResponse {
            student_id: entry.standing.student_id.to_string(),
            name: entry.standing.name,
            grade: entry.standing.grade,
            school_id: entry.standing.school_id.to_string(),
            school_name: entry.standing.school_name,
            avg_score: entry.standing.avg_score.to_f64().unwrap_or(0.0),
            rating_count: entry.standing.rating_count,
            rank: entry.rank,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SchoolStandingResponse {
    pub school_id: String,
    pub school_name: String,
    pub avg_score: f64,
    pub rating_count: i64,
}

impl From<SchoolStanding> for SchoolStandingResponse {
    fn from(standing: SchoolStanding) -> Self {
        SchoolStandingResponse {
            school_id: standing.school_id.to_string(),
            school_name: standing.school_name,
            avg_score: standing.avg_score.to_f64().unwrap_or(0.0),
            rating_count: standing.rating_count,
        }
    }
}
