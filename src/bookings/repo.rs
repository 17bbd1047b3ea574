use crate::bookings::repo_types::Booking;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

impl Booking {
    pub async fn create(
        db: &PgPool,
        brand_id: Uuid,
        influencer_id: Uuid,
        scheduled_at: OffsetDateTime,
        note: Option<&str>,
    ) -> anyhow::Result<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (brand_id, influencer_id, scheduled_at, note)
            VALUES ($1, $2, $3, $4)
            RETURNING id, brand_id, influencer_id, scheduled_at, note, created_at
            "#,
        )
        .bind(brand_id)
        .bind(influencer_id)
        .bind(scheduled_at)
        .bind(note)
        .fetch_one(db)
        .await?;
        Ok(booking)
    }

    /// Bookings where the account is either party, newest first.
    pub async fn list_for_account(db: &PgPool, account_id: Uuid) -> anyhow::Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, brand_id, influencer_id, scheduled_at, note, created_at
            FROM bookings
            WHERE brand_id = $1 OR influencer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
