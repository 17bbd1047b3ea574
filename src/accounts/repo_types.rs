use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Account role. Only influencer accounts are reportable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Brand,
    Influencer,
}

/// Account record in the database, including the mutable trust fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    pub role: Role,
    pub display_name: Option<String>,
    pub profile_complete: bool,
    pub is_blocked: bool,
    pub report_count: i32,
    #[serde(skip_serializing)]
    pub reset_otp: Option<String>,
    #[serde(skip_serializing)]
    pub reset_otp_expires: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
impl Account {
    /// Bare account for unit tests that only exercise pure logic.
    pub(crate) fn fixture(role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: "test@example.com".into(),
            password_hash: "$argon2id$fake".into(),
            role,
            display_name: None,
            profile_complete: false,
            is_blocked: false,
            report_count: 0,
            reset_otp: None,
            reset_otp_expires: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
