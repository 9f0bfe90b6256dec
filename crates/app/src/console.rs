//! Line-oriented front end
//!
//! Each input line is one request. The console keeps the single session
//! cookie a browser would hold and applies the cookie changes the login
//! controller asks for.

use std::io::{self, BufRead, Write};

use gologin_core::{CookieDirective, Session, UserSummary};
use tracing::info;

use crate::state::AppState;

pub struct Console<'a> {
    state: &'a AppState,
    /// Value of the session cookie, as a browser would store it
    jar: Option<String>,
}

impl<'a> Console<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state, jar: None }
    }

    /// Serve requests until `stop` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if !self.handle(line.trim(), &mut out)? {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Handle one request; `false` stops serving
    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let mut words = line.split_whitespace();
        let Some(action) = words.next() else {
            return Ok(true);
        };

        let user = match self.state.login.resolve_user(self.jar.as_deref()) {
            Ok(user) => user,
            Err(e) => {
                writeln!(out, "Error getting user: {}", e)?;
                return Ok(true);
            }
        };

        match action {
            "stop" | "quit" => {
                writeln!(out, "Stopping server")?;
                return Ok(false);
            }
            "login" => self.login(words.next(), words.next(), out)?,
            "logout" => self.logout(out)?,
            "whoami" => match user {
                Some(user) => writeln!(out, "Logged in as {}", user)?,
                None => writeln!(out, "Not logged in")?,
            },
            "cookie" => self.cookie(words.next(), out)?,
            "show" => self.show(words.next().unwrap_or_default(), out)?,
            "delete-all" => {
                info!("Deleting all logins");
                match self.state.store().delete_all_sessions() {
                    Ok(()) => writeln!(out, "All current logins have been deleted")?,
                    Err(e) => writeln!(out, "Error deleting logins: {}", e)?,
                }
            }
            other => writeln!(out, "Unknown action '{}'", other)?,
        }
        Ok(true)
    }

    fn login<W: Write>(
        &mut self,
        user: Option<&str>,
        password: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(user) = user else {
            return writeln!(out, "Usage: login <user> <password>");
        };
        let Some(password) = password else {
            return writeln!(out, "No password");
        };

        let outcome = self
            .state
            .login
            .log_in(self.jar.as_deref(), user, password);
        self.apply(&outcome.cookie, out)?;
        match outcome.result {
            Ok(_) => writeln!(out, "Logged in as {}", user),
            Err(e) => writeln!(out, "Error logging in: {}", e),
        }
    }

    fn logout<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let outcome = self.state.login.log_out(self.jar.as_deref());
        self.apply(&outcome.cookie, out)?;
        match outcome.result {
            Ok(()) => writeln!(out, "You are now logged out"),
            Err(e) => writeln!(out, "Error logging out: {}", e),
        }
    }

    /// Show the held cookie, or present a different one
    fn cookie<W: Write>(&mut self, value: Option<&str>, out: &mut W) -> io::Result<()> {
        if let Some(value) = value {
            self.jar = Some(value.to_string());
        }
        match &self.jar {
            Some(value) => writeln!(out, "{}={}", self.state.login.cookie_name(), value),
            None => writeln!(out, "No cookie"),
        }
    }

    fn show<W: Write>(&self, what: &str, out: &mut W) -> io::Result<()> {
        match what {
            "users" => write_users(&self.state.store().list_users(), out),
            "logins" => write_sessions(&self.state.store().list_sessions(), out),
            other => writeln!(out, "Unknown show '{}'", other),
        }
    }

    fn apply<W: Write>(&mut self, directive: &CookieDirective, out: &mut W) -> io::Result<()> {
        match directive {
            CookieDirective::Unchanged => return Ok(()),
            CookieDirective::Set(cookie) => self.jar = Some(cookie.value.clone()),
            CookieDirective::Clear(_) => self.jar = None,
        }
        if let Some(cookie) = directive.cookie() {
            writeln!(out, "Set-Cookie: {}", cookie)?;
        }
        Ok(())
    }
}

fn write_users<W: Write>(users: &[UserSummary], out: &mut W) -> io::Result<()> {
    if users.is_empty() {
        return writeln!(out, "No users");
    }
    for user in users {
        writeln!(out, "{} ({} logins)", user.username, user.sessions)?;
    }
    Ok(())
}

fn write_sessions<W: Write>(sessions: &[Session], out: &mut W) -> io::Result<()> {
    if sessions.is_empty() {
        return writeln!(out, "No logins");
    }
    for session in sessions {
        writeln!(
            out,
            "{} {} {}",
            session.username,
            session.token,
            session.last_access.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
    }
    Ok(())
}
