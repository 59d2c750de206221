use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    pub description: String,
    /// Open-ended string-keyed map of link labels to URLs.
    pub links: Json,

    #[sea_orm(has_many, via = "project_skill")]
    pub skills: HasMany<super::skill::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
