//! CLI command handlers.

pub mod config;
pub mod endpoints;
pub mod login;
pub mod portal;
pub mod session;
