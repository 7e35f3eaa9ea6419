//! Full-screen TUI for EduGate.
//!
//! Hosts the login dialog as a modal overlay over a small portal view that
//! reacts to the application events the dialog publishes.

pub mod effects;
pub mod events;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use edugate_core::api::HttpAuthClient;
use edugate_core::config::Config;
use edugate_core::dialog::LoginDialog;
use edugate_core::events::EventBus;
use edugate_core::storage::FileStore;
pub use runtime::TuiRuntime;
use state::{AppState, DynStore};

/// Runs the interactive portal until the user quits. Must be called inside
/// a tokio runtime; login calls are spawned onto it.
///
/// # Errors
/// Returns an error if stderr is not a terminal, the HTTP client cannot be
/// built, or terminal I/O fails.
pub fn run_portal(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The portal requires a terminal.\n\
             Use `edugate login --student <ID>` for non-interactive login."
        );
    }

    let client = HttpAuthClient::from_config(config)?;
    let store: DynStore = Box::new(FileStore::new(config.effective_storage_path()));
    tracing::info!(
        api_base_url = config.effective_api_base_url(),
        storage = %config.effective_storage_path().display(),
        "starting portal"
    );

    let dialog = LoginDialog::new(store, EventBus::new());
    let state = AppState::new(dialog, config.effective_api_base_url());

    let mut runtime = TuiRuntime::new(state, client)?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
