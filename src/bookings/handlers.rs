use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    accounts::repo_types::{Account, Role},
    auth::jwt::AuthUser,
    bookings::{dto::CreateBookingRequest, eligibility::can_create_booking, repo_types::Booking},
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings))
        .route("/bookings", post(create_booking))
}

#[instrument(skip(state))]
pub async fn list_bookings(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = Booking::list_for_account(&state.db, account_id).await?;
    Ok(Json(bookings))
}

#[instrument(skip(state, payload))]
pub async fn create_booking(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let account = Account::find_by_id(&state.db, account_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    if account.is_blocked {
        return Err(ApiError::AccountSuspended);
    }

    // Gate before any write.
    if !can_create_booking(&account) {
        return Err(ApiError::ProfileIncomplete);
    }

    let influencer = Account::find_by_id(&state.db, payload.influencer_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    if influencer.role != Role::Influencer {
        return Err(ApiError::WrongRole);
    }

    let booking = Booking::create(
        &state.db,
        account.id,
        influencer.id,
        payload.scheduled_at,
        payload.note.as_deref(),
    )
    .await?;

    info!(booking_id = %booking.id, brand_id = %account.id, influencer_id = %influencer.id, "booking created");
    Ok((StatusCode::CREATED, Json(booking)))
}
