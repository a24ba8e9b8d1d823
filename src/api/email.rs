//! Email sending service.

use std::sync::Arc;

use crate::client::{ClientInner, TokenScope};
use crate::models::{Email, EmailResponse};
use crate::{Error, Result};

/// Service for sending email.
///
/// # Example
///
/// ```no_run
/// use postmark_rs::Email;
///
/// # async fn example(client: postmark_rs::PostmarkClient) -> postmark_rs::Result<()> {
/// let response = client.email().send(&Email {
///     from: "sender@example.com".into(),
///     to: "receiver@example.com".into(),
///     subject: "Hello".into(),
///     text_body: "Hello!".into(),
///     ..Default::default()
/// }).await?;
/// println!("queued as {}", response.message_id);
/// # Ok(())
/// # }
/// ```
pub struct EmailService {
    inner: Arc<ClientInner>,
}

impl EmailService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Send a single email.
    ///
    /// Postmark reports some rejections (for example an unconfirmed sender
    /// signature) with a 200 status and a non-zero `ErrorCode` in the body;
    /// those surface as [`Error::Api`] just like ordinary API errors.
    pub async fn send(&self, email: &Email) -> Result<EmailResponse> {
        let response: EmailResponse =
            self.inner.post("email", email, TokenScope::Server).await?;
        if response.error_code != 0 {
            return Err(Error::Api {
                error_code: response.error_code,
                message: response.message,
            });
        }
        Ok(response)
    }

    /// Send up to 500 emails in one call.
    ///
    /// The batch endpoint answers 200 even when individual messages are
    /// rejected; inspect each [`EmailResponse::error_code`] in the result.
    pub async fn send_batch(&self, emails: &[Email]) -> Result<Vec<EmailResponse>> {
        self.inner
            .post("email/batch", emails, TokenScope::Server)
            .await
    }
}
