//! Runtime execution modes.
//!
//! - `tui`: full-screen portal (optional feature)

#[cfg(feature = "tui")]
pub use edugate_tui::run_portal;

#[cfg(not(feature = "tui"))]
pub fn run_portal(_config: &edugate_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!(
        "TUI support is disabled in this build (feature \"tui\").\n\
         Use `edugate login --student <ID>` instead."
    );
}
