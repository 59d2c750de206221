pub mod health;
pub mod profile;
pub mod project;
pub mod search;
pub mod skill;
pub mod work_experience;
