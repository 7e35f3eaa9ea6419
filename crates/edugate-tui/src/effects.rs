//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; it never performs
//! I/O or spawns tasks.

use edugate_core::api::LoginRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send a validated login request; the result comes back as
    /// `UiEvent::LoginFinished`.
    SubmitLogin { request: LoginRequest },
}
