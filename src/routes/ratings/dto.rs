use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RatingQueryParams {
    /// User whose given ratings are listed, mandatory
    pub rater_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRatingRequest {
    pub rater_id: Option<Uuid>,

    pub target_id: Option<Uuid>,

    #[schema(example = 4)]
    pub score: Option<i16>,

    #[schema(example = "Great mentor during the science fair")]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GivenRatingResponse {
    pub rating_id: String,
    pub target_id: String,
    pub target_name: String,
    pub score: i16,
    pub comment: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitRatingResponse {
    pub rating_id: String,
}
