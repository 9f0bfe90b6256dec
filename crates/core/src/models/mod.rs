//! Data models for gologin

mod cookie;
mod session;
mod user;

pub use cookie::*;
pub use session::*;
pub use user::*;
