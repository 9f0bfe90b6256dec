//! Error types for gologin core

use std::io;

use thiserror::Error;

pub use crate::config::ConfigError;

/// Failure to read, write or decode durable data
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Error reading {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("Error writing {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("Error removing {location}: {source}")]
    Remove {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed data in {location}: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A stored session that names a user the directory does not know
///
/// These never fail an operation. The record is skipped by the indexes and
/// listed by `SessionStore::consistency_errors`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Can't find user with name '{username}' for session '{token}'")]
pub struct ConsistencyError {
    pub token: String,
    pub username: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    #[error("Wrong password for {0}")]
    BadCredentials(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
