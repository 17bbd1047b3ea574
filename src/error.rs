use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Error taxonomy for the public API.
///
/// Recovery failures are deliberately collapsed into a single
/// `InvalidOrExpired` kind so a caller cannot tell a wrong code from an
/// expired one.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Account not found")]
    NotFound,
    #[error("Operation not supported for this account role")]
    WrongRole,
    #[error("Invalid or expired code")]
    InvalidOrExpired,
    #[error("Password must be at least 8 characters and contain a special character")]
    WeakPassword,
    #[error("Complete your profile before creating bookings")]
    ProfileIncomplete,
    #[error("Display name must not be empty")]
    EmptyDisplayName,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account is suspended")]
    AccountSuspended,
    #[error("Unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::WrongRole
            | ApiError::InvalidOrExpired
            | ApiError::WeakPassword
            | ApiError::InvalidEmail
            | ApiError::EmptyDisplayName => StatusCode::BAD_REQUEST,
            ApiError::ProfileIncomplete | ApiError::AccountSuspended => StatusCode::FORBIDDEN,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if let ApiError::Internal(e) = &self {
            error!(error = %e, "internal error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_failures_map_to_bad_request() {
        assert_eq!(ApiError::InvalidOrExpired.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::WeakPassword.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn report_failures_map_to_caller_errors() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::WrongRole.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_hide_their_cause() {
        let err = ApiError::Internal(anyhow::anyhow!("db connection refused"));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn incomplete_profile_is_forbidden() {
        assert_eq!(ApiError::ProfileIncomplete.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn blank_display_name_is_bad_request() {
        assert_eq!(ApiError::EmptyDisplayName.status(), StatusCode::BAD_REQUEST);
    }
}
