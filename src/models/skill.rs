use sea_orm::FromQueryResult;
use serde::Serialize;

use crate::entity::skill;

#[derive(Serialize, utoipa::ToSchema)]
pub struct SkillResponse {
    pub id: i32,
    pub name: String,
}

impl From<skill::Model> for SkillResponse {
    fn from(m: skill::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

/// Row shape for the top-skills aggregation. The count drives ordering only
/// and is not serialized.
#[derive(FromQueryResult)]
pub struct SkillWithProjectCount {
    pub id: i32,
    pub name: String,
    pub project_count: i64,
}

impl From<SkillWithProjectCount> for SkillResponse {
    fn from(m: SkillWithProjectCount) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}
