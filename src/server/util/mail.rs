use async_trait::async_trait;

use crate::server::error::Error;

/// Delivers verification codes to customers.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), Error>;
}

/// Mailer that only records that a code was issued.
///
/// The code itself is logged at `debug` so it can be retrieved in development.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), Error> {
        tracing::info!(email = %email, "Issued password reset verification code");
        tracing::debug!(email = %email, code = %code, "Verification code contents");

        Ok(())
    }
}
