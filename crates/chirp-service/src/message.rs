use std::sync::Arc;

use chirp_db::{AccountStore, MessageStore};
use chirp_types::api::NewMessage;
use chirp_types::models::Message;
use tracing::debug;

use crate::{MAX_MESSAGE_LEN, Result, ServiceError, ValidationError, is_blank, text_len};

pub struct MessageService<M: MessageStore, A: AccountStore> {
    messages: Arc<M>,
    accounts: Arc<A>,
}

impl<M: MessageStore, A: AccountStore> MessageService<M, A> {
    pub fn new(messages: Arc<M>, accounts: Arc<A>) -> Self {
        Self { messages, accounts }
    }

    /// Poster existence is checked before the text, so a request that fails
    /// both reports `UnknownPoster`.
    pub fn create(&self, candidate: NewMessage) -> Result<Message> {
        let poster = match candidate.posted_by {
            Some(id) => self.accounts.find_account_by_id(id)?,
            None => None,
        }
        .ok_or(ValidationError::UnknownPoster)?;

        let text = candidate.message_text.unwrap_or_default();
        validate_text(&text)?;

        let time_posted = candidate
            .time_posted
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        let message = self.messages.save_message(poster.id, &text, time_posted)?;
        debug!(message_id = message.id, posted_by = poster.id, "Message created");
        Ok(message)
    }

    pub fn get_all(&self) -> Result<Vec<Message>> {
        Ok(self.messages.find_messages()?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Message>> {
        Ok(self.messages.find_message(id)?)
    }

    /// Returns 1 if the message existed and was deleted, 0 otherwise.
    pub fn delete_by_id(&self, id: i64) -> Result<usize> {
        Ok(self.messages.remove_message(id)?)
    }

    /// Replaces the text of an existing message and returns 1.
    /// Existence is checked before the new text is validated.
    pub fn update_by_id(&self, id: i64, new_text: Option<&str>) -> Result<usize> {
        if self.messages.find_message(id)?.is_none() {
            return Err(ServiceError::NotFound(id));
        }

        let text = new_text.unwrap_or_default();
        validate_text(text)?;

        match self.messages.replace_message_text(id, text)? {
            // Deleted between the lookup and the write
            0 => Err(ServiceError::NotFound(id)),
            changed => Ok(changed),
        }
    }

    pub fn get_by_poster(&self, account_id: i64) -> Result<Vec<Message>> {
        Ok(self.messages.find_messages_by_poster(account_id)?)
    }
}

fn validate_text(text: &str) -> std::result::Result<(), ValidationError> {
    if is_blank(text) {
        return Err(ValidationError::BlankText);
    }
    if text_len(text) > MAX_MESSAGE_LEN {
        return Err(ValidationError::TextTooLong);
    }
    Ok(())
}
