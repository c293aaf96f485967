use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(alias = "accountId")]
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// A short text post. `time_posted` is epoch seconds and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(alias = "messageId")]
    pub id: i64,
    pub posted_by: i64,
    pub message_text: String,
    #[serde(alias = "timePostedEpoch")]
    pub time_posted: i64,
}
