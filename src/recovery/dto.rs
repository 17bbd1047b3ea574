use serde::{Deserialize, Serialize};

/// Request body for `POST /recovery/request`.
#[derive(Debug, Deserialize)]
pub struct RequestRecovery {
    pub email: String,
}

/// Request body for `POST /recovery/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyRecovery {
    pub email: String,
    pub code: String,
}

/// Request body for `POST /recovery/complete`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRecovery {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Generic success envelope for the recovery endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_recovery_accepts_camel_case() {
        let body = r#"{"email":"a@b.c","code":"1234","newPassword":"hunter2!"}"#;
        let req: CompleteRecovery = serde_json::from_str(body).unwrap();
        assert_eq!(req.new_password, "hunter2!");
    }
}
