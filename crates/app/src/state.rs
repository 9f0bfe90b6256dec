//! Application state management

use std::path::Path;
use std::sync::Arc;

use gologin_core::{storage, Config, Error, LoginController, Result, SessionStore};

/// Config file looked for in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "gologin.toml";

/// Main application state
pub struct AppState {
    pub config: Config,
    pub login: LoginController<SessionStore>,
}

impl AppState {
    /// Open the stores named by `config`
    pub fn new(config: Config) -> Result<Self> {
        let store = storage::open(&config)?;
        Ok(Self::from_store(config, store))
    }

    pub fn from_store(config: Config, store: Arc<SessionStore>) -> Self {
        let login = LoginController::new(store, &config);
        Self { config, login }
    }

    pub fn store(&self) -> &SessionStore {
        self.login.store()
    }
}

/// Load the config file given on the command line, or the default one
///
/// A missing default file means built-in defaults; a missing explicit
/// file is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                Ok(Config::load(default)?)
            } else {
                tracing::info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                let config = Config::default();
                config.validate().map_err(Error::Config)?;
                Ok(config)
            }
        }
    }
}
