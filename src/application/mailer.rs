use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::mail::EmailMessage;
use crate::domain::ports::Mailer;
use crate::errors::ServiceError;

/// Fire-and-forget email dispatch.
///
/// `send` validates the message synchronously, hands delivery to a spawned
/// task, and returns immediately. The handle lets a caller observe
/// completion or failure, but a returned handle only means the message was
/// accepted for sending, not that it was delivered. Cancellation is not
/// supported.
pub struct MailDispatcher<M> {
    mailer: Arc<M>,
}

impl<M: Mailer> MailDispatcher<M> {
    pub fn new(mailer: M) -> Self {
        Self {
            mailer: Arc::new(mailer),
        }
    }

    pub fn send(
        &self,
        mail: EmailMessage,
    ) -> Result<JoinHandle<Result<(), ServiceError>>, ServiceError> {
        if mail.to.trim().is_empty() || !mail.to.contains('@') {
            return Err(ServiceError::validation(format!(
                "recipient '{}' is not a valid address",
                mail.to
            )));
        }

        let mailer = Arc::clone(&self.mailer);
        Ok(tokio::spawn(async move {
            match mailer.deliver(&mail).await {
                Ok(()) => {
                    log::info!("delivered mail to {}", mail.to);
                    Ok(())
                }
                Err(e) => {
                    log::warn!("mail delivery to {} failed: {}", mail.to, e);
                    Err(e)
                }
            }
        }))
    }
}
