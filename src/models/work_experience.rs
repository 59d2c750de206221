use chrono::NaiveDate;
use serde::Serialize;

use crate::entity::work_experience;

#[derive(Serialize, utoipa::ToSchema)]
pub struct WorkExperienceResponse {
    pub id: i32,
    pub company: String,
    pub role: String,
    pub description: String,
    pub start_date: NaiveDate,
    /// `null` means the position is ongoing.
    pub end_date: Option<NaiveDate>,
}

impl From<work_experience::Model> for WorkExperienceResponse {
    fn from(m: work_experience::Model) -> Self {
        Self {
            id: m.id,
            company: m.company,
            role: m.role,
            description: m.description,
            start_date: m.start_date,
            end_date: m.end_date,
        }
    }
}
