//! Store capabilities the services are written against. `Database` is the
//! only production implementation.

use chirp_types::models::{Account, Message};

use crate::{Database, Result};

pub trait AccountStore: Send + Sync {
    /// Fails with `DbError::UsernameTaken` when the username is already stored.
    fn save_account(&self, username: &str, password: &str) -> Result<Account>;
    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>>;
    fn find_account_by_id(&self, id: i64) -> Result<Option<Account>>;
}

pub trait MessageStore: Send + Sync {
    fn save_message(&self, posted_by: i64, message_text: &str, time_posted: i64)
    -> Result<Message>;
    fn find_message(&self, id: i64) -> Result<Option<Message>>;
    /// All messages, ascending id.
    fn find_messages(&self) -> Result<Vec<Message>>;
    fn find_messages_by_poster(&self, posted_by: i64) -> Result<Vec<Message>>;
    /// Returns 1 when a message was removed, 0 when none had this id.
    fn remove_message(&self, id: i64) -> Result<usize>;
    fn replace_message_text(&self, id: i64, message_text: &str) -> Result<usize>;
}

impl AccountStore for Database {
    fn save_account(&self, username: &str, password: &str) -> Result<Account> {
        self.create_account(username, password).map(Account::from)
    }

    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        Ok(self.get_account_by_username(username)?.map(Account::from))
    }

    fn find_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        Ok(self.get_account_by_id(id)?.map(Account::from))
    }
}

impl MessageStore for Database {
    fn save_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted: i64,
    ) -> Result<Message> {
        self.insert_message(posted_by, message_text, time_posted)
            .map(Message::from)
    }

    fn find_message(&self, id: i64) -> Result<Option<Message>> {
        Ok(self.get_message(id)?.map(Message::from))
    }

    fn find_messages(&self) -> Result<Vec<Message>> {
        Ok(self.get_messages()?.into_iter().map(Message::from).collect())
    }

    fn find_messages_by_poster(&self, posted_by: i64) -> Result<Vec<Message>> {
        Ok(self
            .get_messages_by_poster(posted_by)?
            .into_iter()
            .map(Message::from)
            .collect())
    }

    fn remove_message(&self, id: i64) -> Result<usize> {
        self.delete_message(id)
    }

    fn replace_message_text(&self, id: i64, message_text: &str) -> Result<usize> {
        self.update_message_text(id, message_text)
    }
}
