use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    accounts::repo_types::Account,
    auth::{
        dto::{AuthResponse, LoginRequest, RegisterRequest},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
    error::ApiError,
    recovery::services::is_strong_password,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::InvalidEmail);
    }

    // Same policy as password recovery
    if !is_strong_password(&payload.password) {
        return Err(ApiError::WeakPassword);
    }

    if Account::find_by_email(&state.db, &payload.email)
        .await?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::EmailTaken);
    }

    let hash = hash_password(&payload.password)?;
    let account = Account::create(&state.db, &payload.email, &hash, payload.role).await?;

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(account.id)?;

    info!(account_id = %account.id, role = ?account.role, "account registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            account: account.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let account = Account::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!("login unknown email");
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&payload.password, &account.password_hash)? {
        warn!(account_id = %account.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    // Suspended accounts keep their credentials but lose access.
    if account.is_blocked {
        warn!(account_id = %account.id, "login refused for suspended account");
        return Err(ApiError::AccountSuspended);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(account.id)?;

    info!(account_id = %account.id, "login");
    Ok(Json(AuthResponse {
        access_token,
        account: account.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("brand@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }
}
