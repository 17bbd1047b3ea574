use axum::{extract::State, routing::post, Json, Router};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    accounts::repo_types::Account,
    auth::password::hash_password,
    error::ApiError,
    recovery::{
        dto::{CompleteRecovery, MessageResponse, RequestRecovery, VerifyRecovery},
        services::{code_expiry, code_is_valid, generate_code, is_strong_password},
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recovery/request", post(request_recovery))
        .route("/recovery/verify", post(verify_recovery))
        .route("/recovery/complete", post(complete_recovery))
}

/// The response is identical whether or not the email is registered, and
/// whether or not delivery worked. Anything else would let a caller probe
/// which emails have accounts.
const REQUEST_RESPONSE: &str = "If that email is registered, a recovery code has been sent";

#[instrument(skip(state, payload))]
pub async fn request_recovery(
    State(state): State<AppState>,
    Json(payload): Json<RequestRecovery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = payload.email.trim().to_lowercase();

    let Some(account) = Account::find_by_email(&state.db, &email).await? else {
        info!("recovery requested for unknown email");
        return Ok(Json(MessageResponse::new(REQUEST_RESPONSE)));
    };

    let code = generate_code();
    let expires = code_expiry(OffsetDateTime::now_utc());
    Account::set_recovery_code(&state.db, account.id, &code, expires).await?;

    if let Err(e) = state.mailer.send_recovery_code(&email, &code).await {
        warn!(error = %e, account_id = %account.id, "recovery code delivery failed");
    }

    info!(account_id = %account.id, "recovery code issued");
    Ok(Json(MessageResponse::new(REQUEST_RESPONSE)))
}

#[instrument(skip(state, payload))]
pub async fn verify_recovery(
    State(state): State<AppState>,
    Json(payload): Json<VerifyRecovery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = payload.email.trim().to_lowercase();

    let account = Account::find_by_email(&state.db, &email)
        .await?
        .ok_or(ApiError::InvalidOrExpired)?;

    if !code_is_valid(&account, payload.code.trim(), OffsetDateTime::now_utc()) {
        return Err(ApiError::InvalidOrExpired);
    }

    // Verification leaves the code in place; it is consumed at completion.
    Ok(Json(MessageResponse::new("Code verified")))
}

#[instrument(skip(state, payload))]
pub async fn complete_recovery(
    State(state): State<AppState>,
    Json(payload): Json<CompleteRecovery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = payload.email.trim().to_lowercase();
    let now = OffsetDateTime::now_utc();

    let account = Account::find_by_email(&state.db, &email)
        .await?
        .ok_or(ApiError::InvalidOrExpired)?;

    if !code_is_valid(&account, payload.code.trim(), now) {
        return Err(ApiError::InvalidOrExpired);
    }

    if !is_strong_password(&payload.new_password) {
        return Err(ApiError::WeakPassword);
    }

    let hash = hash_password(&payload.new_password)?;

    // The update re-checks code and expiry so a code consumed or superseded
    // since the read above cannot be replayed. The timestamp is taken after
    // hashing, otherwise the comparison would run against a clock reading a
    // hashing-latency stale.
    let consumed = Account::consume_recovery_code(
        &state.db,
        &email,
        payload.code.trim(),
        &hash,
        OffsetDateTime::now_utc(),
    )
    .await?;
    if !consumed {
        return Err(ApiError::InvalidOrExpired);
    }

    info!(account_id = %account.id, "password recovered");
    Ok(Json(MessageResponse::new("Password updated")))
}
