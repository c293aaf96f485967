use serde::{Deserialize, Serialize};

// -- Accounts --

/// Body of `/register` and `/login`. Fields stay optional so that a missing
/// username or password reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

// -- Messages --

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    #[serde(default)]
    pub posted_by: Option<i64>,
    #[serde(default)]
    pub message_text: Option<String>,
    #[serde(default, alias = "timePostedEpoch")]
    pub time_posted: Option<i64>,
}

impl NewMessage {
    pub fn new(posted_by: i64, message_text: impl Into<String>) -> Self {
        Self {
            posted_by: Some(posted_by),
            message_text: Some(message_text.into()),
            time_posted: None,
        }
    }
}

/// Body of `PATCH /messages/{message_id}`. Only the text is read; other
/// message fields a client sends along are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[serde(default)]
    pub message_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
