pub mod profile;
pub mod project;
pub mod project_skill;
pub mod skill;
pub mod social_links;
pub mod work_experience;
