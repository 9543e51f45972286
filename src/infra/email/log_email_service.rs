use crate::domain::ports::EmailService;
use crate::error::AppError;
use async_trait::async_trait;
use tracing::info;

/// Used when no mail relay is configured: mails are only logged.
pub struct LogEmailService;

#[async_trait]
impl EmailService for LogEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        attachment_name: Option<&str>,
        _attachment_data: Option<&[u8]>,
    ) -> Result<(), AppError> {
        info!(
            recipient = %recipient,
            subject = %subject,
            attachment = attachment_name.unwrap_or("-"),
            body_len = body.len(),
            "Mail relay not configured, mail logged only"
        );
        Ok(())
    }
}
