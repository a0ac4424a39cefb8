use serde::{Deserialize, Serialize};

/// An outbound email accepted for asynchronous dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, file_name: impl Into<String>, content: Vec<u8>) -> Self {
        self.attachment = Some(Attachment {
            file_name: file_name.into(),
            content,
        });
        self
    }
}
