use crate::accounts::repo_types::{Account, Role};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

const ACCOUNT_COLUMNS: &str = r#"
    id, email, password_hash, role, display_name,
    profile_complete, is_blocked, report_count,
    reset_otp, reset_otp_expires, created_at
"#;

impl Account {
    /// Find an account by email (emails are stored lowercase).
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(account)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(account)
    }

    /// Create a new account with a hashed password.
    pub async fn create(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> anyhow::Result<Account> {
        let account = sqlx::query_as::<_, Account>(&format!(
            r#"
            INSERT INTO accounts (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(db)
        .await?;
        Ok(account)
    }

    /// Store a fresh recovery code, superseding any outstanding one.
    pub async fn set_recovery_code(
        db: &PgPool,
        id: Uuid,
        code: &str,
        expires: OffsetDateTime,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE accounts
            SET reset_otp = $2, reset_otp_expires = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(code)
        .bind(expires)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Consume a recovery code: replace the password hash and clear both OTP
    /// fields in one conditional update. Returns false when the code no
    /// longer matches or has expired (someone else consumed or superseded it
    /// between verification and now).
    pub async fn consume_recovery_code(
        db: &PgPool,
        email: &str,
        code: &str,
        new_password_hash: &str,
        now: OffsetDateTime,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET password_hash = $2, reset_otp = NULL, reset_otp_expires = NULL
            WHERE email = $1
              AND reset_otp = $3
              AND reset_otp_expires > $4
            "#,
        )
        .bind(email)
        .bind(new_password_hash)
        .bind(code)
        .bind(now)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Save profile fields and flip `profile_complete`. The flag is only ever
    /// set, never cleared, so repeated saves are harmless. Returns the
    /// updated row, or None when no such account exists.
    pub async fn complete_profile(
        db: &PgPool,
        id: Uuid,
        display_name: &str,
    ) -> anyhow::Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            r#"
            UPDATE accounts
            SET display_name = $2, profile_complete = TRUE
            WHERE id = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(display_name)
        .fetch_optional(db)
        .await?;
        Ok(account)
    }

    /// Record one abuse report. The increment and the threshold check run in
    /// a single statement so concurrent reports cannot lose an increment or
    /// miss the crossing. Returns the new (count, blocked) pair, or None when
    /// the account is already blocked (counter frozen) or does not exist.
    pub async fn record_report(
        db: &PgPool,
        id: Uuid,
        threshold: i32,
    ) -> anyhow::Result<Option<(i32, bool)>> {
        let row = sqlx::query_as::<_, (i32, bool)>(
            r#"
            UPDATE accounts
            SET report_count = report_count + 1,
                is_blocked = report_count + 1 >= $2
            WHERE id = $1 AND is_blocked = FALSE
            RETURNING report_count, is_blocked
            "#,
        )
        .bind(id)
        .bind(threshold)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Administrative unblock. Clears the suspension only; the report counter
    /// is preserved. Returns false when no such account exists.
    pub async fn unblock(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("UPDATE accounts SET is_blocked = FALSE WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
