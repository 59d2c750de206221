use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::health::health))
        .routes(routes!(
            handlers::profile::get_profile,
            handlers::profile::create_profile,
            handlers::profile::update_profile
        ))
        .routes(routes!(handlers::project::list_projects))
        .routes(routes!(handlers::skill::top_skills))
        .routes(routes!(handlers::work_experience::list_work_experiences))
        .routes(routes!(handlers::search::search))
}
