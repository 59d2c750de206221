use axum::Json;
use axum::extract::State;
use sea_orm::prelude::Expr;
use sea_orm::*;
use tracing::instrument;

use crate::entity::skill;
use crate::error::AppError;
use crate::models::skill::{SkillResponse, SkillWithProjectCount};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/skills/top/",
    tag = "Skills",
    operation_id = "topSkills",
    summary = "List skills by project count",
    description = "Returns all skills ordered by descending count of related projects (ties broken by id). The count drives ordering only and is not included in the response.",
    responses(
        (status = 200, description = "Skills in descending project-count order", body = Vec<SkillResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn top_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillResponse>>, AppError> {
    let mut rows = skill::Entity::find()
        .select_only()
        .column(skill::Column::Id)
        .column(skill::Column::Name)
        .column_as(
            Expr::cust(
                "(SELECT COUNT(*) FROM \"project_skill\" \
                 WHERE \"project_skill\".\"skill_id\" = \"skill\".\"id\")",
            ),
            "project_count",
        )
        .into_model::<SkillWithProjectCount>()
        .all(&state.db)
        .await?;

    rows.sort_by(|a, b| {
        b.project_count
            .cmp(&a.project_count)
            .then(a.id.cmp(&b.id))
    });

    Ok(Json(rows.into_iter().map(SkillResponse::from).collect()))
}
