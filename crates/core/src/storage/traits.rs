//! Storage seam used by the login controller
//!
//! Allows the controller to run against the file-backed session store or
//! any other implementation (mocks, a future database backend).

use crate::error::Result;

/// Persistent storage operations needed to log users in and out
pub trait LoginStore: Send + Sync {
    /// Does the user exist
    fn find_user(&self, username: &str) -> bool;

    /// Is this a valid username and password pair
    fn check_password(&self, username: &str, password: &str) -> bool;

    /// Store a new session for the user and return its token
    fn create_session(&self, username: &str) -> Result<String>;

    /// Find the user owning a token
    fn lookup_token(&self, token: &str) -> Result<Option<String>>;

    /// Delete the session with a token, returning whether it existed
    fn delete_session(&self, token: &str) -> Result<bool>;
}
