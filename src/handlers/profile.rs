use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{profile, social_links};
use crate::error::{AppError, ErrorBody, field_error};
use crate::extractors::json::AppJson;
use crate::models::profile::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/profile/",
    tag = "Profile",
    operation_id = "getProfile",
    summary = "Get the current profile",
    description = "Returns the first profile record. When a social_links row exists, its github, linkedin and portfolio URLs are flattened into the response object.",
    responses(
        (status = 200, description = "Current profile", body = ProfileResponse),
        (status = 404, description = "No profile exists (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>, AppError> {
    let Some(model) = first_profile(&state.db).await? else {
        return Err(AppError::NotFound("No profile found".into()));
    };

    let social = social_links::Entity::find()
        .order_by_asc(social_links::Column::Id)
        .one(&state.db)
        .await?;

    Ok(Json(ProfileResponse::with_social(model, social)))
}

#[utoipa::path(
    post,
    path = "/profile/",
    tag = "Profile",
    operation_id = "createProfile",
    summary = "Create a profile",
    description = "Validates and creates a new profile. The email must be unique across all profiles.",
    request_body = ProfilePayload,
    responses(
        (status = 201, description = "Profile created", body = ProfileResponse),
        (status = 400, description = "Validation errors as a field → messages object"),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_profile(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProfilePayload>,
) -> Result<impl IntoResponse, AppError> {
    let fields = validate_profile_payload(&payload)?;
    ensure_email_unique(&state.db, &fields.email, None).await?;

    let new_profile = profile::ActiveModel {
        name: Set(fields.name),
        email: Set(fields.email),
        education: Set(fields.education),
        bio: Set(fields.bio),
        ..Default::default()
    };

    let model = new_profile.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(ProfileResponse::from(model))))
}

#[utoipa::path(
    put,
    path = "/profile/",
    tag = "Profile",
    operation_id = "updateProfile",
    summary = "Overwrite the current profile",
    description = "Validates and overwrites every field of the first profile record. All required fields must be present (full-update semantics).",
    request_body = ProfilePayload,
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 400, description = "Validation errors as a field → messages object"),
        (status = 404, description = "No profile exists (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProfilePayload>,
) -> Result<Json<ProfileResponse>, AppError> {
    let Some(existing) = first_profile(&state.db).await? else {
        return Err(AppError::NotFound("No profile found".into()));
    };

    let fields = validate_profile_payload(&payload)?;
    ensure_email_unique(&state.db, &fields.email, Some(existing.id)).await?;

    let mut active: profile::ActiveModel = existing.into();
    active.name = Set(fields.name);
    active.email = Set(fields.email);
    active.education = Set(fields.education);
    active.bio = Set(fields.bio);

    let model = active.update(&state.db).await?;

    Ok(Json(model.into()))
}

/// The "current" profile: the row with the lowest id.
async fn first_profile(db: &DatabaseConnection) -> Result<Option<profile::Model>, AppError> {
    Ok(profile::Entity::find()
        .order_by_asc(profile::Column::Id)
        .one(db)
        .await?)
}

/// Reject an email already used by a different profile row. `exclude_id` is
/// the row being updated, which may keep its own email.
async fn ensure_email_unique(
    db: &DatabaseConnection,
    email: &str,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let mut select = profile::Entity::find().filter(profile::Column::Email.eq(email));
    if let Some(id) = exclude_id {
        select = select.filter(profile::Column::Id.ne(id));
    }

    if select.one(db).await?.is_some() {
        return Err(AppError::Validation(field_error(
            "email",
            "profile with this email already exists.",
        )));
    }
    Ok(())
}
