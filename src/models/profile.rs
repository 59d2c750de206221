use serde::{Deserialize, Serialize};

use crate::entity::{profile, social_links};
use crate::error::{AppError, FieldErrors};

/// Request body for both POST and PUT on the profile resource.
///
/// Fields are optional at the deserialization level so that missing and blank
/// values can be reported per field instead of failing the whole body.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ProfilePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub bio: Option<String>,
}

/// Validated profile fields extracted from a [`ProfilePayload`].
#[derive(Debug)]
pub struct ProfileFields {
    pub name: String,
    pub email: String,
    pub education: String,
    pub bio: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SocialLinksFields {
    pub github: String,
    pub linkedin: String,
    pub portfolio: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProfileResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub education: String,
    pub bio: String,
    /// Social link fields flattened into the profile object when a
    /// social_links row exists. Absent row, absent keys.
    #[serde(flatten)]
    pub social: Option<SocialLinksFields>,
}

impl ProfileResponse {
    pub fn with_social(profile: profile::Model, social: Option<social_links::Model>) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            education: profile.education,
            bio: profile.bio,
            social: social.map(|s| SocialLinksFields {
                github: s.github,
                linkedin: s.linkedin,
                portfolio: s.portfolio,
            }),
        }
    }
}

impl From<profile::Model> for ProfileResponse {
    fn from(m: profile::Model) -> Self {
        Self::with_social(m, None)
    }
}

/// Validate a profile payload, collecting every field failure before returning.
/// Email uniqueness is checked separately by the handler against the store.
pub fn validate_profile_payload(payload: &ProfilePayload) -> Result<ProfileFields, AppError> {
    let mut errors = FieldErrors::new();

    check_required(&mut errors, "name", payload.name.as_deref(), 100);
    check_required(&mut errors, "email", payload.email.as_deref(), 254);
    if let Some(email) = payload.email.as_deref()
        && !email.trim().is_empty()
        && !is_valid_email(email)
    {
        push_error(&mut errors, "email", "Enter a valid email address.");
    }
    check_required(&mut errors, "education", payload.education.as_deref(), 0);

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(ProfileFields {
        name: payload.name.clone().unwrap_or_default(),
        email: payload.email.clone().unwrap_or_default(),
        education: payload.education.clone().unwrap_or_default(),
        bio: payload.bio.clone().unwrap_or_default(),
    })
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Required-field checks: present, non-blank, and within `max_len` characters
/// (0 = unlimited).
fn check_required(errors: &mut FieldErrors, field: &str, value: Option<&str>, max_len: usize) {
    match value {
        None => push_error(errors, field, "This field is required."),
        Some(v) if v.trim().is_empty() => {
            push_error(errors, field, "This field may not be blank.")
        }
        Some(v) if max_len > 0 && v.chars().count() > max_len => push_error(
            errors,
            field,
            &format!("Ensure this field has no more than {max_len} characters."),
        ),
        Some(_) => {}
    }
}

/// Minimal email shape check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
