use async_trait::async_trait;
use tracing::info;

/// Outbound delivery seam for recovery codes.
///
/// Delivery is best-effort: callers log failures and keep going, so a broken
/// transport never leaks account existence through the response.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_recovery_code(&self, email: &str, code: &str) -> anyhow::Result<()>;
}

/// Development transport: writes the code to the log instead of sending mail.
#[derive(Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_recovery_code(&self, email: &str, code: &str) -> anyhow::Result<()> {
        info!(%email, %code, "recovery code (log transport)");
        Ok(())
    }
}
