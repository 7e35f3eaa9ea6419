//! UI events consumed by the reducer.

use crossterm::event::Event;
use edugate_core::api::{LoginReply, LoginRequest, TransportError};
use edugate_core::events::AppEvent;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives rendering and the spinner.
    Tick,

    /// Raw terminal input.
    Terminal(Event),

    /// A spawned login call finished.
    LoginFinished {
        request: LoginRequest,
        result: Result<LoginReply, TransportError>,
    },

    /// Notification received from the application event bus.
    App(AppEvent),
}
