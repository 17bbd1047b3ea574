use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Request body for booking creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub influencer_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
    pub note: Option<String>,
}
