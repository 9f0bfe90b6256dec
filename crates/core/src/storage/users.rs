//! Registered user directory
//!
//! Loaded once at startup and read-only afterwards.

use std::collections::HashMap;

use tracing::{info, instrument, warn};

use super::medium::Medium;
use super::parse::read_list;
use crate::error::Result;
use crate::models::User;

#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    /// Username to position in `users`
    by_name: HashMap<String, usize>,
}

impl UserDirectory {
    /// Load the users file; an absent file is an empty directory
    #[instrument(skip(medium), fields(location = %medium.locate(name)))]
    pub fn load(medium: &dyn Medium, name: &str) -> Result<Self> {
        let users = match read_list::<User>(medium, name)? {
            Some(users) => users,
            None => {
                info!("No users file, starting with no users");
                Vec::new()
            }
        };
        let directory = Self::from_users(users);
        info!(users = directory.len(), "Loaded user directory");
        Ok(directory)
    }

    /// Build a directory from records; blank usernames are skipped and a
    /// repeated username resolves to its last record
    pub fn from_users(users: Vec<User>) -> Self {
        let mut kept = Vec::with_capacity(users.len());
        for user in users {
            if user.username.is_empty() {
                warn!("Skipping user record with an empty login");
                continue;
            }
            kept.push(user);
        }

        let mut by_name = HashMap::with_capacity(kept.len());
        for (i, user) in kept.iter().enumerate() {
            if by_name.insert(user.username.clone(), i).is_some() {
                warn!(username = %user.username, "Duplicate user record, last one wins");
            }
        }

        Self { users: kept, by_name }
    }

    /// Case-sensitive existence check
    pub fn find_user(&self, username: &str) -> bool {
        self.by_name.contains_key(username)
    }

    /// Exact password comparison; unknown users fail the same way as
    /// wrong passwords
    pub fn check_password(&self, username: &str, password: &str) -> bool {
        self.get(username)
            .map(|user| user.password == password)
            .unwrap_or(false)
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.by_name.get(username).map(|&i| &self.users[i])
    }

    /// Users in file order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
