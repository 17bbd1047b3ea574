use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    accounts::repo_types::{Account, Role},
    error::ApiError,
    moderation::dto::{ReportResponse, UnblockResponse},
    state::AppState,
};

/// Accounts are suspended automatically once they accumulate this many
/// abuse reports.
pub const BLOCK_THRESHOLD: i32 = 10;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts/:id/report", post(report_account))
        .route("/admin/accounts/:id/unblock", post(unblock_account))
}

#[instrument(skip(state))]
pub async fn report_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportResponse>, ApiError> {
    let account = Account::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if account.role != Role::Influencer {
        return Err(ApiError::WrongRole);
    }

    if account.is_blocked {
        // Counter is frozen once suspended; repeated reports are no-ops.
        return Ok(Json(ReportResponse {
            report_count: account.report_count,
            is_blocked: true,
            just_blocked: false,
            message: "Account is already suspended".into(),
        }));
    }

    // Single-statement increment-and-check; see Account::record_report. None
    // here means a concurrent report suspended the account after our read.
    let Some((report_count, is_blocked)) =
        Account::record_report(&state.db, id, BLOCK_THRESHOLD).await?
    else {
        let account = Account::find_by_id(&state.db, id)
            .await?
            .ok_or(ApiError::NotFound)?;
        return Ok(Json(ReportResponse {
            report_count: account.report_count,
            is_blocked: account.is_blocked,
            just_blocked: false,
            message: "Account is already suspended".into(),
        }));
    };

    if is_blocked {
        warn!(account_id = %id, report_count, "account auto-suspended");
    } else {
        info!(account_id = %id, report_count, "abuse report recorded");
    }

    Ok(Json(ReportResponse {
        report_count,
        is_blocked,
        // The row was unblocked before this write, so blocked-now means this
        // report crossed the threshold.
        just_blocked: is_blocked,
        message: if is_blocked {
            "Report recorded; account suspended".into()
        } else {
            "Report recorded".into()
        },
    }))
}

#[instrument(skip(state, headers))]
pub async fn unblock_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<UnblockResponse>, ApiError> {
    let token = headers
        .get("x-admin-token")
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;
    if token != state.config.admin_token {
        return Err(ApiError::Unauthorized);
    }

    if !Account::unblock(&state.db, id).await? {
        return Err(ApiError::NotFound);
    }

    info!(account_id = %id, "account unblocked by admin");
    Ok(Json(UnblockResponse {
        is_blocked: false,
        message: "Account unblocked".into(),
    }))
}
