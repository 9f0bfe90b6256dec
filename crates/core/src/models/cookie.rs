//! Cookie instructions handed to the transport layer

use std::fmt;

/// A session cookie the client should store or discard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    /// Tells the client to forget the value
    pub expired: bool,
}

impl Cookie {
    pub fn session(name: &str, path: &str, token: &str) -> Self {
        Self {
            name: name.to_string(),
            value: token.to_string(),
            path: path.to_string(),
            expired: false,
        }
    }

    pub fn cleared(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
            path: path.to_string(),
            expired: true,
        }
    }
}

/// Renders the value of a `Set-Cookie` header
impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}; Path={}", self.name, self.value, self.path)?;
        if self.expired {
            write!(f, "; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0")?;
        }
        Ok(())
    }
}

/// What the caller should do with the client's session cookie
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CookieDirective {
    #[default]
    Unchanged,
    Set(Cookie),
    Clear(Cookie),
}

impl CookieDirective {
    pub fn cookie(&self) -> Option<&Cookie> {
        match self {
            CookieDirective::Unchanged => None,
            CookieDirective::Set(c) | CookieDirective::Clear(c) => Some(c),
        }
    }
}
