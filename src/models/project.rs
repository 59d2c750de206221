use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::entity::project;
use crate::models::skill::SkillResponse;

#[derive(Deserialize, IntoParams)]
pub struct ProjectListQuery {
    /// Case-insensitive substring filter on related skill names.
    pub skill: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// String-keyed map of link labels to URLs.
    #[schema(value_type = Object)]
    pub links: serde_json::Value,
    pub skills: Vec<SkillResponse>,
}

impl ProjectResponse {
    pub fn from_model(m: project::Model, skills: Vec<SkillResponse>) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            links: m.links,
            skills,
        }
    }
}
