use crate::models::{AccountRow, MessageRow};
use crate::{Database, DbError, Result};
use rusqlite::{Connection, Row, ffi};

const MESSAGE_COLUMNS: &str = "id, posted_by, message_text, time_posted";

impl Database {
    // -- Accounts --

    /// Inserts an account. The UNIQUE constraint on `username` makes the
    /// uniqueness check and the write a single atomic step.
    pub fn create_account(&self, username: &str, password: &str) -> Result<AccountRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO accounts (username, password) VALUES (?1, ?2)",
                (username, password),
            )
            .map_err(map_unique_violation)?;

            Ok(AccountRow {
                id: conn.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })
        })
    }

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, username, password FROM accounts WHERE username = ?1",
                [username],
                account_from_row,
            )
            .optional()
        })
    }

    pub fn get_account_by_id(&self, id: i64) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, username, password FROM accounts WHERE id = ?1",
                [id],
                account_from_row,
            )
            .optional()
        })
    }

    // -- Messages --

    pub fn insert_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted: i64,
    ) -> Result<MessageRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (posted_by, message_text, time_posted) VALUES (?1, ?2, ?3)",
                rusqlite::params![posted_by, message_text, time_posted],
            )?;

            Ok(MessageRow {
                id: conn.last_insert_rowid(),
                posted_by,
                message_text: message_text.to_string(),
                time_posted,
            })
        })
    }

    pub fn get_message(&self, id: i64) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = ?1"),
                [id],
                message_from_row,
            )
            .optional()
        })
    }

    pub fn get_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| query_messages(conn, None))
    }

    pub fn get_messages_by_poster(&self, posted_by: i64) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| query_messages(conn, Some(posted_by)))
    }

    /// Returns the number of rows removed (0 or 1).
    pub fn delete_message(&self, id: i64) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM messages WHERE id = ?1", [id])?))
    }

    /// Replaces the text of one message. Returns the number of rows changed.
    pub fn update_message_text(&self, id: i64, message_text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            Ok(conn.execute(
                "UPDATE messages SET message_text = ?2 WHERE id = ?1",
                rusqlite::params![id, message_text],
            )?)
        })
    }
}

fn query_messages(conn: &Connection, posted_by: Option<i64>) -> Result<Vec<MessageRow>> {
    let filter = if posted_by.is_some() { "WHERE posted_by = ?1 " } else { "" };
    let mut stmt = conn.prepare(&format!(
        "SELECT {MESSAGE_COLUMNS} FROM messages {filter}ORDER BY id"
    ))?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(posted_by), message_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        id: row.get(0)?,
        posted_by: row.get(1)?,
        message_text: row.get(2)?,
        time_posted: row.get(3)?,
    })
}

fn map_unique_violation(err: rusqlite::Error) -> DbError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            DbError::UsernameTaken
        }
        _ => DbError::Sqlite(err),
    }
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_with_account(username: &str) -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        let account = db.create_account(username, "pass").unwrap();
        (db, account.id)
    }

    #[test]
    fn duplicate_username_is_rejected_by_the_store() {
        let (db, _) = db_with_account("alice");
        let err = db.create_account("alice", "other").unwrap_err();
        assert!(matches!(err, DbError::UsernameTaken));
    }

    #[test]
    fn account_lookups() {
        let (db, id) = db_with_account("alice");

        let by_name = db.get_account_by_username("alice").unwrap().unwrap();
        assert_eq!(by_name.id, id);
        assert_eq!(by_name.password, "pass");

        assert_eq!(db.get_account_by_id(id).unwrap().unwrap().username, "alice");
        assert!(db.get_account_by_username("bob").unwrap().is_none());
        assert!(db.get_account_by_id(id + 1).unwrap().is_none());
    }

    #[test]
    fn message_lifecycle() {
        let (db, id) = db_with_account("alice");

        let msg = db.insert_message(id, "hello", 100).unwrap();
        assert_eq!(db.get_message(msg.id).unwrap().unwrap().message_text, "hello");

        assert_eq!(db.update_message_text(msg.id, "edited").unwrap(), 1);
        let updated = db.get_message(msg.id).unwrap().unwrap();
        assert_eq!(updated.message_text, "edited");
        assert_eq!(updated.time_posted, 100);

        assert_eq!(db.delete_message(msg.id).unwrap(), 1);
        assert_eq!(db.delete_message(msg.id).unwrap(), 0);
        assert!(db.get_message(msg.id).unwrap().is_none());
        assert_eq!(db.update_message_text(msg.id, "gone").unwrap(), 0);
    }

    #[test]
    fn messages_filter_by_poster_in_id_order() {
        let (db, alice) = db_with_account("alice");
        let bob = db.create_account("bob", "pass").unwrap().id;

        let first = db.insert_message(alice, "a1", 1).unwrap().id;
        db.insert_message(bob, "b1", 2).unwrap();
        let second = db.insert_message(alice, "a2", 3).unwrap().id;

        let ids: Vec<i64> = db
            .get_messages_by_poster(alice)
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![first, second]);

        assert_eq!(db.get_messages().unwrap().len(), 3);
        assert!(db.get_messages_by_poster(bob + 100).unwrap().is_empty());
    }
}
