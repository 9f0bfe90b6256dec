//! User model

use serde::{Deserialize, Serialize};

/// A registered account as stored in the users file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "login")]
    pub username: String,
    #[serde(rename = "pass")]
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Read-only view of a user for administrative listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    /// Number of active sessions
    pub sessions: usize,
}
