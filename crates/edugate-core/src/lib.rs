//! Core EduGate library (login dialog, backend API, config, session storage).

pub mod api;
pub mod captcha;
pub mod config;
pub mod dialog;
pub mod endpoints;
pub mod events;
pub mod logging;
pub mod session;
pub mod storage;
