//! Database row types. These map directly to SQLite rows and are kept
//! apart from the chirp-types records so the schema can move independently.

use chirp_types::models::{Account, Message};

#[derive(Debug)]
pub struct AccountRow {
    pub id: i64,
    pub username: String,
    pub password: String,
}

pub struct MessageRow {
    pub id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted: i64,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password: row.password,
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            posted_by: row.posted_by,
            message_text: row.message_text,
            time_posted: row.time_posted,
        }
    }
}
