//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that take over keyboard input while open.
//! Each overlay owns its view state, key handler and render function.
//!
//! - `login.rs`: login dialog overlay (category picker and credential form)
//! - `render_utils.rs`: shared rendering helpers

pub mod login;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use login::{Field, LoginOverlayState};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::state::TuiState;

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Login(LoginOverlayState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        match self {
            Overlay::Login(l) => l.render(frame, area, tui),
        }
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Login(l) => l.handle_key(&mut tui.dialog, key),
        }
    }

    pub fn handle_paste(&mut self, tui: &mut TuiState, text: &str) {
        match self {
            Overlay::Login(l) => l.handle_paste(&mut tui.dialog, text),
        }
    }
}

/// Render helper for `Option<Overlay>`.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        if let Some(overlay) = self {
            overlay.render(frame, area, tui);
        }
    }
}
