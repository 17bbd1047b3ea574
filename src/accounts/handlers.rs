use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    accounts::{
        dto::{ProfileRequest, PublicAccount},
        repo_types::Account,
    },
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/me/profile", post(save_profile))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
) -> Result<Json<PublicAccount>, ApiError> {
    let account = Account::find_by_id(&state.db, account_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(account.into()))
}

/// Non-empty after trimming; a blank name must not flip the completion flag.
pub(crate) fn normalize_display_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Saves profile fields and marks the profile complete, which unlocks
/// booking creation. Idempotent.
#[instrument(skip(state, payload))]
pub async fn save_profile(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<PublicAccount>, ApiError> {
    let display_name =
        normalize_display_name(&payload.display_name).ok_or(ApiError::EmptyDisplayName)?;

    let account = Account::complete_profile(&state.db, account_id, display_name)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    info!(account_id = %account.id, "profile completed");
    Ok(Json(account.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_trimmed_and_must_be_non_empty() {
        assert_eq!(normalize_display_name("  Ada  "), Some("Ada"));
        assert_eq!(normalize_display_name("Ada"), Some("Ada"));
        assert_eq!(normalize_display_name(""), None);
        assert_eq!(normalize_display_name("   \t"), None);
    }
}
