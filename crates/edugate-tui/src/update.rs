//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use edugate_core::api::{LoginReply, LoginRequest, TransportError};
use edugate_core::dialog::LoginSuccess;
use edugate_core::events::AppEvent;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{LoginOverlayState, Overlay, OverlayTransition, OverlayUpdate};
use crate::state::{AppState, Portal};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginFinished { request, result } => {
            handle_login_finished(app, &request, result);
            vec![]
        }
        UiEvent::App(app_event) => {
            handle_app_event(app, app_event);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if let Some(overlay) = app.overlay.as_mut() {
                overlay.handle_paste(&mut app.tui, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(&mut app.tui, key);
        return apply_overlay_update(app, update);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('l') => {
            app.tui.notice = None;
            app.overlay = Some(Overlay::Login(LoginOverlayState::open(
                &mut app.tui.dialog,
            )));
            vec![]
        }
        _ => vec![],
    }
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    if update.transition == OverlayTransition::Close {
        app.overlay = None;
    }
    for effect in &update.effects {
        if matches!(effect, UiEffect::SubmitLogin { .. }) {
            app.tui.pending_logins += 1;
        }
    }
    update.effects
}

fn handle_login_finished(
    app: &mut AppState,
    request: &LoginRequest,
    result: Result<LoginReply, TransportError>,
) {
    app.tui.pending_logins = app.tui.pending_logins.saturating_sub(1);

    // Completions are not tied to the dialog session that sent them: a reply
    // arriving after the overlay was reopened is applied to the new form.
    match app.tui.dialog.finish_submit(request, result) {
        Ok(LoginSuccess::Welcome { message, .. }) => {
            app.tui.notice = Some(message);
        }
        Ok(LoginSuccess::Student(_) | LoginSuccess::FacultyPortal { .. }) => {}
        Err(_) => {
            // A completion that arrives after the overlay was dismissed has
            // nowhere to show its error.
            if app.overlay.is_none() {
                app.tui.dialog.close();
            }
        }
    }

    if !app.tui.dialog.is_open() {
        app.overlay = None;
    }
}

fn handle_app_event(app: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::StudentLoginSuccess(session) => {
            app.tui.notice = Some(format!("Signed in as {}", session.display_name()));
            app.tui.portal = Portal::Student(session);
        }
        AppEvent::OpenFacultyPortal => {
            app.tui.notice = None;
            app.tui.portal = Portal::faculty_from_store(app.tui.dialog.store());
        }
    }
}
