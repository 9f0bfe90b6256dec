//! gologin - cookie login demonstrator
//!
//! Reads commands from standard input and answers the way the web front
//! end would, keeping the session cookie a browser would hold.

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod console;
mod state;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting gologin");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match state::load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Without users nobody can ever log in, so this is fatal
    let app_state = match state::AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        data_dir = %app_state.config.data_dir.display(),
        users = app_state.store().users().len(),
        "Serving on standard input"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = console::Console::new(&app_state);
    if let Err(e) = console.run(stdin.lock(), stdout.lock()) {
        tracing::error!("Console failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server has stopped");
}
