//! Logging users in and out
//!
//! The controller checks credentials, starts and ends sessions, and maps a
//! presented session token back to a username. It never touches a
//! transport: each call returns plain data plus a [`CookieDirective`]
//! telling the caller what to do with the client's session cookie.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Cookie, CookieDirective};
use crate::storage::LoginStore;

/// Result of a controller call together with the cookie change it implies
#[derive(Debug)]
pub struct Outcome<T> {
    pub result: Result<T>,
    pub cookie: CookieDirective,
}

impl<T> Outcome<T> {
    fn new(result: Result<T>, cookie: CookieDirective) -> Self {
        Self { result, cookie }
    }
}

pub struct LoginController<S: LoginStore + ?Sized> {
    store: Arc<S>,
    cookie_name: String,
    cookie_path: String,
}

impl<S: LoginStore + ?Sized> LoginController<S> {
    pub fn new(store: Arc<S>, config: &Config) -> Self {
        Self {
            store,
            cookie_name: config.cookie_name.clone(),
            cookie_path: config.cookie_path.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Name of the cookie carrying the session token
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Log a user in, replacing the session of any presented cookie
    ///
    /// On success the outcome carries the new token and a cookie to set. A
    /// wrong password clears a presented cookie, whose session is gone by
    /// then.
    #[instrument(skip(self, presented, password))]
    pub fn log_in(
        &self,
        presented: Option<&str>,
        username: &str,
        password: &str,
    ) -> Outcome<String> {
        if !self.store.find_user(username) {
            return Outcome::new(
                Err(Error::UnknownUser(username.to_string())),
                CookieDirective::Unchanged,
            );
        }

        let presented = presented.filter(|t| !t.is_empty());
        if let Some(old) = presented {
            debug!(token = %old, "Deleting old cookie");
            if let Err(e) = self.store.delete_session(old) {
                warn!(error = %e, "Failed to delete old session, continuing");
            }
        }

        if !self.store.check_password(username, password) {
            let cookie = match presented {
                Some(_) => CookieDirective::Clear(self.cleared_cookie()),
                None => CookieDirective::Unchanged,
            };
            return Outcome::new(Err(Error::BadCredentials(username.to_string())), cookie);
        }

        match self.store.create_session(username) {
            Ok(token) => {
                debug!(token = %token, "Password correct, setting cookie");
                let cookie = CookieDirective::Set(self.session_cookie(&token));
                Outcome::new(Ok(token), cookie)
            }
            // The presented session is gone either way
            Err(e) => {
                let cookie = match presented {
                    Some(_) => CookieDirective::Clear(self.cleared_cookie()),
                    None => CookieDirective::Unchanged,
                };
                Outcome::new(Err(e), cookie)
            }
        }
    }

    /// End the session of a presented cookie
    #[instrument(skip(self, presented))]
    pub fn log_out(&self, presented: Option<&str>) -> Outcome<()> {
        let Some(token) = presented.filter(|t| !t.is_empty()) else {
            debug!("You were not logged in");
            return Outcome::new(Ok(()), CookieDirective::Unchanged);
        };

        match self.store.delete_session(token) {
            Ok(_) => Outcome::new(Ok(()), CookieDirective::Clear(self.cleared_cookie())),
            Err(e) => Outcome::new(Err(e), CookieDirective::Unchanged),
        }
    }

    /// The username behind a presented cookie
    ///
    /// A missing, empty or unknown token is an anonymous request, not an
    /// error.
    pub fn resolve_user(&self, presented: Option<&str>) -> Result<Option<String>> {
        match presented.filter(|t| !t.is_empty()) {
            Some(token) => self.store.lookup_token(token),
            None => Ok(None),
        }
    }

    fn session_cookie(&self, token: &str) -> Cookie {
        Cookie::session(&self.cookie_name, &self.cookie_path, token)
    }

    fn cleared_cookie(&self) -> Cookie {
        Cookie::cleared(&self.cookie_name, &self.cookie_path)
    }
}
