use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};
use sea_orm::sea_query::Query as SeaQuery;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{project, project_skill, skill};
use crate::error::AppError;
use crate::models::project::*;
use crate::models::shared::{contains_pattern, lower_like};
use crate::models::skill::SkillResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/projects/",
    tag = "Projects",
    operation_id = "listProjects",
    summary = "List projects",
    description = "Returns all projects with their related skills embedded, ordered by id. The optional `skill` parameter keeps only projects having at least one related skill whose name contains the given substring, case-insensitive.",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let mut select = project::Entity::find().order_by_asc(project::Column::Id);

    if let Some(ref skill_name) = query.skill {
        let term = skill_name.trim();
        if !term.is_empty() {
            select = select.filter(projects_with_skill_like(&contains_pattern(term)));
        }
    }

    let projects = select.all(&state.db).await?;
    let items = attach_skills(&state.db, projects).await?;

    Ok(Json(items))
}

/// Filter expression: project id appears in the join table for a skill whose
/// name matches the given LIKE pattern.
pub(crate) fn projects_with_skill_like(pattern: &str) -> sea_orm::sea_query::SimpleExpr {
    project::Column::Id.in_subquery(
        SeaQuery::select()
            .column(project_skill::Column::ProjectId)
            .from(project_skill::Entity)
            .and_where(
                project_skill::Column::SkillId.in_subquery(
                    SeaQuery::select()
                        .column(skill::Column::Id)
                        .from(skill::Entity)
                        .and_where(lower_like(skill::Column::Name, pattern))
                        .to_owned(),
                ),
            )
            .to_owned(),
    )
}

/// Expand each project with its full list of related skills (id order),
/// using one query over the join table for the whole batch.
pub(crate) async fn attach_skills<C: ConnectionTrait>(
    db: &C,
    projects: Vec<project::Model>,
) -> Result<Vec<ProjectResponse>, DbErr> {
    if projects.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    let rows = project_skill::Entity::find()
        .filter(project_skill::Column::ProjectId.is_in(ids))
        .find_also_related(skill::Entity)
        .order_by_asc(project_skill::Column::SkillId)
        .all(db)
        .await?;

    let mut by_project: HashMap<i32, Vec<SkillResponse>> = HashMap::new();
    for (link, related) in rows {
        if let Some(s) = related {
            by_project.entry(link.project_id).or_default().push(s.into());
        }
    }

    Ok(projects
        .into_iter()
        .map(|p| {
            let skills = by_project.remove(&p.id).unwrap_or_default();
            ProjectResponse::from_model(p, skills)
        })
        .collect())
}
