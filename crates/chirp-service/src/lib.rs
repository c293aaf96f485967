//! Account and message use-cases.
//!
//! Services validate input and coordinate the store; they never retry or
//! mask a failure. Absence on read/delete by id is a normal outcome, not an
//! error.

pub mod account;
pub mod credentials;
pub mod error;
pub mod message;

pub use account::AccountService;
pub use credentials::CredentialScheme;
pub use error::{AuthError, Result, ServiceError, ValidationError};
pub use message::MessageService;

pub const MIN_PASSWORD_LEN: usize = 4;
pub const MAX_MESSAGE_LEN: usize = 255;

/// Lengths are measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
pub(crate) fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Empty or made only of whitespace characters.
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(is_space)
}

/// Unicode space, line and paragraph separators except the no-break spaces,
/// plus the ASCII control whitespace (tab through carriage return, and the
/// file/group/record/unit separators). NEL is not whitespace.
fn is_space(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}
