//! Interactive portal (default command).

use anyhow::{Context, Result};
use edugate_core::config::Config;

use crate::modes;

pub fn run(config: &Config) -> Result<()> {
    modes::run_portal(config).context("interactive portal failed")
}
