use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A scheduled collaboration between a brand and an influencer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub influencer_id: Uuid,
    pub scheduled_at: OffsetDateTime,
    pub note: Option<String>,
    pub created_at: OffsetDateTime,
}
