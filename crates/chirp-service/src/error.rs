use chirp_db::DbError;
use thiserror::Error;

use crate::{MAX_MESSAGE_LEN, MIN_PASSWORD_LEN};

/// Malformed or missing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username cannot be blank")]
    BlankUsername,

    #[error("password must be at least {} characters", MIN_PASSWORD_LEN)]
    ShortPassword,

    /// `postedBy` does not reference an existing account.
    #[error("user not found")]
    UnknownPoster,

    #[error("message text cannot be blank")]
    BlankText,

    #[error("message text cannot exceed {} characters", MAX_MESSAGE_LEN)]
    TextTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("username not found")]
    UnknownUsername,

    #[error("invalid username or password")]
    InvalidCredentials,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("username already exists")]
    Conflict,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("message {0} not found")]
    NotFound(i64),

    #[error("credential error: {0}")]
    Credential(String),

    #[error("store error: {0}")]
    Store(#[source] DbError),
}

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::UsernameTaken => Self::Conflict,
            other => Self::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
