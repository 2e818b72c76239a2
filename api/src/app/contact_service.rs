//! Contact service
//!
//! Public contact-form intake and the admin inbox.

use std::sync::Arc;

use crate::domain::entities::{
    ContactMessage, ContactMessageId, ContactStatus, NewContactMessage,
};
use crate::domain::ports::ContactMessageRepository;
use crate::error::AppError;

/// Service for contact messages
pub struct ContactService<CR>
where
    CR: ContactMessageRepository,
{
    messages: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactMessageRepository,
{
    pub fn new(messages: Arc<CR>) -> Self {
        Self { messages }
    }

    /// Accept a contact-form submission; all four fields are required
    pub async fn submit(&self, message: NewContactMessage) -> Result<ContactMessage, AppError> {
        if message.name.is_empty()
            || message.email.is_empty()
            || message.subject.is_empty()
            || message.message.is_empty()
        {
            return Err(AppError::BadRequest("All fields are required".to_string()));
        }

        Ok(self.messages.create(&message).await?)
    }

    /// Admin inbox, newest first; returns the page and total count
    pub async fn list(
        &self,
        status: Option<ContactStatus>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<ContactMessage>, u64), AppError> {
        Ok(self.messages.list(status, page.max(1), page_size).await?)
    }

    /// Move a message through the triage states
    pub async fn update_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<ContactMessage, AppError> {
        self.messages
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact message {} not found", id)))
    }
}
