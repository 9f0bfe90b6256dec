//! JSON file storage layer for gologin

mod medium;
mod parse;
mod sessions;
mod traits;
mod users;

use std::sync::Arc;

use tracing::{instrument, warn};

use crate::config::Config;
use crate::error::Result;

pub use medium::{DirMedium, Medium, MemoryMedium};
pub(crate) use sessions::SessionState;
pub use sessions::SessionStore;
pub use traits::LoginStore;
pub use users::UserDirectory;

/// Open the stores described by `config`
///
/// A users file that cannot be read is fatal. A sessions file that cannot
/// be read is logged and the store starts empty.
#[instrument(skip(config), fields(data_dir = %config.data_dir.display()))]
pub fn open(config: &Config) -> Result<Arc<SessionStore>> {
    let medium: Arc<dyn Medium> = Arc::new(DirMedium::new(&config.data_dir));
    open_on(config, medium)
}

/// Open the stores on an arbitrary medium
pub fn open_on(config: &Config, medium: Arc<dyn Medium>) -> Result<Arc<SessionStore>> {
    config.validate()?;
    let users = Arc::new(UserDirectory::load(medium.as_ref(), &config.users_file)?);

    let store = match SessionStore::load(
        users.clone(),
        medium.clone(),
        config.sessions_file.clone(),
        config.token_length,
    ) {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "Failed to load sessions, starting with none");
            SessionStore::empty(
                users,
                medium,
                config.sessions_file.clone(),
                config.token_length,
            )?
        }
    };

    Ok(Arc::new(store))
}

impl LoginStore for SessionStore {
    fn find_user(&self, username: &str) -> bool {
        self.users().find_user(username)
    }

    fn check_password(&self, username: &str, password: &str) -> bool {
        self.users().check_password(username, password)
    }

    fn create_session(&self, username: &str) -> Result<String> {
        SessionStore::create_session(self, username)
    }

    fn lookup_token(&self, token: &str) -> Result<Option<String>> {
        Ok(self.resolve_token(token))
    }

    fn delete_session(&self, token: &str) -> Result<bool> {
        SessionStore::delete_session(self, token)
    }
}
