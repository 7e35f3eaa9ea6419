//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── dialog: LoginDialog      (login state machine + session store)
//! │   ├── portal: Portal           (who is logged in, fed by app events)
//! │   └── notice / pending_logins  (status shown on the home view)
//! └── overlay: Option<Overlay>     (modal overlays)
//! ```
//!
//! `TuiState` and the overlay are separate fields so overlay key handlers can
//! borrow both mutably at once.

use edugate_core::api::ServerUser;
use edugate_core::dialog::LoginDialog;
use edugate_core::session::StudentSession;
use edugate_core::storage::{STUDENT_KEY, SessionStore, USER_KEY};

use crate::overlays::Overlay;

/// Session store used by the TUI: a file store at runtime, memory in tests.
pub type DynStore = Box<dyn SessionStore + Send>;

pub type Dialog = LoginDialog<DynStore>;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(dialog: Dialog, api_base_url: impl Into<String>) -> Self {
        Self {
            tui: TuiState::new(dialog, api_base_url.into()),
            overlay: None,
        }
    }
}

pub struct TuiState {
    pub dialog: Dialog,
    pub portal: Portal,
    /// One-line message on the home view (welcome acknowledgment, status).
    pub notice: Option<String>,
    /// Login calls spawned and not yet finished.
    pub pending_logins: usize,
    pub api_base_url: String,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl TuiState {
    fn new(dialog: Dialog, api_base_url: String) -> Self {
        let portal = Portal::restore(dialog.store());
        Self {
            dialog,
            portal,
            notice: None,
            pending_logins: 0,
            api_base_url,
            spinner_frame: 0,
            should_quit: false,
        }
    }
}

/// The portal the home view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Portal {
    #[default]
    None,
    Student(StudentSession),
    Faculty { name: Option<String> },
}

impl Portal {
    /// Rebuilds the portal from stored session records.
    ///
    /// A stored student record wins over a stored faculty user. Unreadable
    /// records are logged and ignored.
    pub fn restore<S: SessionStore + ?Sized>(store: &S) -> Self {
        match read_student(store) {
            Ok(Some(session)) => return Portal::Student(session),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %format!("{e:#}"), "ignoring stored student record"),
        }

        match read_user(store) {
            Ok(Some(user)) if user.role() == Some("teacher") => Portal::Faculty { name: user.name() },
            Ok(_) => Portal::None,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "ignoring stored user record");
                Portal::None
            }
        }
    }

    /// Faculty portal for the user the dialog just stored.
    pub fn faculty_from_store<S: SessionStore + ?Sized>(store: &S) -> Self {
        let name = read_user(store).ok().flatten().and_then(|user| user.name());
        Portal::Faculty { name }
    }
}

fn read_student<S: SessionStore + ?Sized>(store: &S) -> anyhow::Result<Option<StudentSession>> {
    let Some(raw) = store.get(STUDENT_KEY)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

fn read_user<S: SessionStore + ?Sized>(store: &S) -> anyhow::Result<Option<ServerUser>> {
    let Some(raw) = store.get(USER_KEY)? else {
        return Ok(None);
    };
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(ServerUser::from_value(value))
}
