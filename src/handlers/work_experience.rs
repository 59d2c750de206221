use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::work_experience;
use crate::error::AppError;
use crate::models::work_experience::WorkExperienceResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/work-experiences/",
    tag = "Work Experience",
    operation_id = "listWorkExperiences",
    summary = "List work experiences",
    description = "Returns all work experience records, most recent start date first.",
    responses(
        (status = 200, description = "Work experiences, newest first", body = Vec<WorkExperienceResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_work_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkExperienceResponse>>, AppError> {
    let rows = work_experience::Entity::find()
        .order_by_desc(work_experience::Column::StartDate)
        .order_by_asc(work_experience::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(
        rows.into_iter().map(WorkExperienceResponse::from).collect(),
    ))
}
