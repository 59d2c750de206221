use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_experience")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub company: String,
    pub role: String,
    pub description: String,
    pub start_date: Date,
    /// NULL means the position is ongoing.
    pub end_date: Option<Date>,
}

impl ActiveModelBehavior for ActiveModel {}
