//! gologin Core Library
//!
//! Cookie-based login sessions for a small set of registered users, kept
//! in flat JSON files.

pub mod config;
pub mod error;
mod invariants;
pub mod login;
pub mod models;
pub mod storage;
pub mod token;

pub use config::Config;
pub use error::{ConsistencyError, Error, Result, StorageError};
pub use login::{LoginController, Outcome};
pub use models::*;
pub use storage::{DirMedium, LoginStore, Medium, MemoryMedium, SessionStore, UserDirectory};
