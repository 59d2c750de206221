use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{profile, project, skill, work_experience};
use crate::handlers::project::{attach_skills, projects_with_skill_like};
use crate::models::search::*;
use crate::models::shared::{contains_pattern, lower_like};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/search/",
    tag = "Search",
    operation_id = "search",
    summary = "Search across all portfolio entities",
    description = "Runs four independent case-insensitive substring searches over projects (title, description, related skill names), skills (name), work experiences (company, role, description) and the profile (name, education, bio — first match only). An empty or missing `q` yields 400; an unexpected store fault is caught and reported as 500, both with empty result lists.",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Missing or empty query", body = SearchErrorResponse),
        (status = 500, description = "Unexpected fault during search", body = SearchErrorResponse),
    ),
)]
#[instrument(skip(state, query))]
pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Response {
    let q = query.q.as_deref().unwrap_or("").trim();
    if q.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SearchErrorResponse::missing_query()),
        )
            .into_response();
    }

    match run_search(&state.db, q).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => {
            tracing::error!("Search query failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchErrorResponse::internal(err.to_string())),
            )
                .into_response()
        }
    }
}

async fn run_search(db: &DatabaseConnection, q: &str) -> Result<SearchResponse, DbErr> {
    let pattern = contains_pattern(q);

    // Projects by title, description, or related skill name. The skill match
    // goes through a subquery on the join table, so no row duplication occurs
    // and no explicit DISTINCT is needed.
    let projects = project::Entity::find()
        .filter(
            Condition::any()
                .add(lower_like(project::Column::Title, &pattern))
                .add(lower_like(project::Column::Description, &pattern))
                .add(projects_with_skill_like(&pattern)),
        )
        .order_by_asc(project::Column::Id)
        .all(db)
        .await?;
    let projects = attach_skills(db, projects).await?;

    // Skills by name.
    let skills = skill::Entity::find()
        .filter(lower_like(skill::Column::Name, &pattern))
        .order_by_asc(skill::Column::Name)
        .all(db)
        .await?;

    // Work experiences by company, role, or description.
    let work_experiences = work_experience::Entity::find()
        .filter(
            Condition::any()
                .add(lower_like(work_experience::Column::Company, &pattern))
                .add(lower_like(work_experience::Column::Role, &pattern))
                .add(lower_like(work_experience::Column::Description, &pattern)),
        )
        .order_by_desc(work_experience::Column::StartDate)
        .order_by_asc(work_experience::Column::Id)
        .all(db)
        .await?;

    // Profile by name, education, or bio: first match only.
    let profile = profile::Entity::find()
        .filter(
            Condition::any()
                .add(lower_like(profile::Column::Name, &pattern))
                .add(lower_like(profile::Column::Education, &pattern))
                .add(lower_like(profile::Column::Bio, &pattern)),
        )
        .order_by_asc(profile::Column::Id)
        .one(db)
        .await?;

    Ok(SearchResponse {
        projects,
        skills: skills.into_iter().map(Into::into).collect(),
        work_experiences: work_experiences.into_iter().map(Into::into).collect(),
        profiles: profile.map(Into::into),
    })
}
