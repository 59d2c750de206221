use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_skill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub project_id: i32,
    #[sea_orm(primary_key)]
    pub skill_id: i32,
    #[sea_orm(belongs_to, from = "project_id", to = "id")]
    pub project: Option<super::project::Entity>,
    #[sea_orm(belongs_to, from = "skill_id", to = "id")]
    pub skill: Option<super::skill::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
