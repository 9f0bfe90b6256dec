//! Session model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Active session for a logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "login")]
    pub username: String,
    #[serde(rename = "cookie")]
    pub token: String,
    #[serde(rename = "last")]
    pub last_access: DateTime<Utc>,
}

impl Session {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            last_access: Utc::now(),
        }
    }
}
