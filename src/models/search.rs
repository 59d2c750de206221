use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::models::profile::ProfileResponse;
use crate::models::project::ProjectResponse;
use crate::models::skill::SkillResponse;
use crate::models::work_experience::WorkExperienceResponse;

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Search term, matched as a case-insensitive substring.
    pub q: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SearchResponse {
    pub projects: Vec<ProjectResponse>,
    pub skills: Vec<SkillResponse>,
    pub work_experiences: Vec<WorkExperienceResponse>,
    /// First matching profile, or `null`. Singular despite the plural key.
    pub profiles: Option<ProfileResponse>,
}

/// Body for the 400/500 search responses: a message plus four empty result
/// lists, so clients can treat the shape uniformly.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SearchErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub projects: Vec<ProjectResponse>,
    pub skills: Vec<SkillResponse>,
    pub work_experiences: Vec<WorkExperienceResponse>,
    pub profiles: Vec<ProfileResponse>,
}

impl SearchErrorResponse {
    pub fn missing_query() -> Self {
        Self {
            message: Some("Query parameter 'q' is required".into()),
            error: None,
            projects: Vec::new(),
            skills: Vec::new(),
            work_experiences: Vec::new(),
            profiles: Vec::new(),
        }
    }

    pub fn internal(detail: String) -> Self {
        Self {
            message: None,
            error: Some(detail),
            projects: Vec::new(),
            skills: Vec::new(),
            work_experiences: Vec::new(),
            profiles: Vec::new(),
        }
    }
}
