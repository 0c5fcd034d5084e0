use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::sea_orm_active_enums::BadgeTypeEnum;

#[derive(Debug, Serialize, ToSchema)]
pub struct BadgeResponse {
    pub badge_id: String,
    pub name: String,
    pub description: String,
    pub badge_type: BadgeTypeEnum,
    pub rule_desc: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentBadgeResponse {
    pub id: String,
    pub badge_id: String,
    pub badge_name: String,
    pub period: String,
    pub awarded_at: String,
}
