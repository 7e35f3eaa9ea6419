//! Login dialog state machine.
//!
//! Headless model of the modal login form: category selection, credential
//! input, the CAPTCHA challenge and the submit flow. Front ends (TUI, CLI)
//! render it and feed it input.
//!
//! ## Submit
//!
//! `submit` is `begin_submit` (local validation, builds the request), one
//! `AuthApi::login` call, then `finish_submit` (persist, publish, close).
//! Callers that run the network call elsewhere, like the TUI runtime, use
//! the two halves directly. Nothing prevents a second submit while one is in
//! flight; each completion is applied as it arrives.

mod errors;

pub use errors::{LoginError, ValidationError};
use rand::rngs::StdRng;

use crate::api::{AuthApi, LoginReply, LoginRequest, ServerUser, TransportError};
use crate::captcha::{self, Captcha};
use crate::events::{AppEvent, EventBus};
use crate::session::StudentSession;
use crate::storage::{STUDENT_KEY, SessionStore, USER_KEY};

/// Role the server reports for students.
const STUDENT_ROLE: &str = "student";

/// Role that opens the faculty portal.
const TEACHER_ROLE: &str = "teacher";

const STUDENT_AUTH_FALLBACK: &str = "Invalid Student ID or Password";
const FACULTY_AUTH_FALLBACK: &str = "Login failed";

/// Which login flow the dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Unselected,
    Student,
    Faculty,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Category::Unselected => "Select Login Type",
            Category::Student => "Student Login",
            Category::Faculty => "Faculty Login",
        }
    }

    pub fn identifier_label(self) -> &'static str {
        match self {
            Category::Student => "Student ID",
            Category::Faculty | Category::Unselected => "Email",
        }
    }

    pub fn identifier_placeholder(self) -> &'static str {
        match self {
            Category::Student => "Enter your Student ID (e.g., 2335000001)",
            Category::Faculty | Category::Unselected => "Enter your Email",
        }
    }
}

/// Form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialInput {
    pub id: String,
    pub password: String,
    pub captcha: String,
}

impl CredentialInput {
    fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.password.is_empty() && !self.captcha.is_empty()
    }
}

/// Successful login outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginSuccess {
    /// Student record stored and `studentLoginSuccess` published.
    Student(StudentSession),
    /// Teacher user stored and `openFacultyPortal` published.
    FacultyPortal { user: ServerUser },
    /// Non-teacher faculty-flow user stored; the front end shows `message`.
    Welcome { user: ServerUser, message: String },
}

pub struct LoginDialog<S> {
    open: bool,
    category: Category,
    input: CredentialInput,
    captcha: Captcha,
    error: Option<String>,
    store: S,
    events: EventBus,
    rng: StdRng,
}

impl<S: SessionStore> LoginDialog<S> {
    /// Creates a closed dialog. See [`captcha::rng_from_env`] for how the
    /// challenge generator is seeded.
    pub fn new(store: S, events: EventBus) -> Self {
        Self::with_rng(store, events, captcha::rng_from_env())
    }

    /// Creates a closed dialog drawing challenges from `rng`.
    ///
    /// The first challenge is drawn here and replaced by the next one on
    /// every `open`.
    pub fn with_rng(store: S, events: EventBus, mut rng: StdRng) -> Self {
        let captcha = Captcha::generate_with(&mut rng);
        Self {
            open: false,
            category: Category::Unselected,
            input: CredentialInput::default(),
            captcha,
            error: None,
            store,
            events,
            rng,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn input(&self) -> &CredentialInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut CredentialInput {
        &mut self.input
    }

    pub fn captcha(&self) -> &Captcha {
        &self.captcha
    }

    /// Inline error from the last failed submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Opens the dialog with a full reset: category, input, challenge, error.
    pub fn open(&mut self) {
        self.open = true;
        self.category = Category::Unselected;
        self.input = CredentialInput::default();
        self.error = None;
        self.regenerate_captcha();
        tracing::debug!("login dialog opened");
    }

    /// Closes the dialog. Input is kept until the next `open`.
    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
        tracing::debug!("login dialog closed");
    }

    /// Picks a login flow from the category picker.
    ///
    /// Only valid while no category is selected; returns whether the
    /// category changed.
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.category != Category::Unselected || category == Category::Unselected {
            return false;
        }
        self.category = category;
        tracing::debug!(?category, "login category selected");
        true
    }

    /// Returns to the category picker, clearing input and error and drawing a
    /// fresh challenge.
    pub fn back(&mut self) {
        self.category = Category::Unselected;
        self.error = None;
        self.input = CredentialInput::default();
        self.regenerate_captcha();
    }

    /// Draws a new challenge on user request. Input is left untouched.
    pub fn refresh_captcha(&mut self) {
        self.regenerate_captcha();
    }

    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.input.id = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.input.password = value.into();
    }

    pub fn set_captcha_response(&mut self, value: impl Into<String>) {
        self.input.captcha = value.into();
    }

    /// Runs one full submit against `api`.
    ///
    /// # Errors
    /// Returns the failure also recorded as the dialog's inline error.
    pub async fn submit<A: AuthApi>(&mut self, api: &A) -> Result<LoginSuccess, LoginError> {
        let request = self.begin_submit()?;
        let result = api.login(&request).await;
        self.finish_submit(&request, result)
    }

    /// Validates the form and builds the login request.
    ///
    /// Checks, in order: all fields filled, CAPTCHA matches
    /// (case-insensitive), a category is selected. Student credentials are
    /// trimmed; faculty credentials are sent as typed.
    ///
    /// # Errors
    /// Returns a validation or state error; no request should be sent.
    pub fn begin_submit(&mut self) -> Result<LoginRequest, LoginError> {
        if !self.input.is_complete() {
            return Err(self.fail(LoginError::Validation(ValidationError::MissingFields)));
        }
        if !self.captcha.matches(&self.input.captcha) {
            return Err(self.fail(LoginError::Validation(ValidationError::InvalidCaptcha)));
        }

        match self.category {
            Category::Student => Ok(LoginRequest::Student {
                student_id: self.input.id.trim().to_string(),
                password: self.input.password.trim().to_string(),
            }),
            Category::Faculty => Ok(LoginRequest::Faculty {
                email: self.input.id.clone(),
                password: self.input.password.clone(),
            }),
            Category::Unselected => {
                tracing::error!("submit reached without a login category");
                Err(self.fail(LoginError::State))
            }
        }
    }

    /// Applies the outcome of the login call made for `request`.
    ///
    /// # Errors
    /// Returns an auth, network or storage error; the dialog stays open.
    pub fn finish_submit(
        &mut self,
        request: &LoginRequest,
        result: Result<LoginReply, TransportError>,
    ) -> Result<LoginSuccess, LoginError> {
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "login request failed");
                return Err(self.fail(LoginError::Network(e)));
            }
        };

        let outcome = match request {
            LoginRequest::Student { .. } => self.complete_student(reply),
            LoginRequest::Faculty { .. } => self.complete_faculty(reply),
        };

        match outcome {
            Ok(success) => {
                tracing::info!(identifier = request.identifier(), "login succeeded");
                self.close();
                Ok(success)
            }
            Err(e) => {
                tracing::warn!(identifier = request.identifier(), error = %e, "login rejected");
                Err(self.fail(e))
            }
        }
    }

    fn complete_student(&mut self, reply: LoginReply) -> Result<LoginSuccess, LoginError> {
        let user = match reply {
            LoginReply::Accepted { user, .. } if user.role() == Some(STUDENT_ROLE) => user,
            LoginReply::Accepted { message, .. } | LoginReply::Rejected { message } => {
                return Err(auth_error(message, STUDENT_AUTH_FALLBACK));
            }
        };

        let session = StudentSession::from_user(&user);
        let serialized = serde_json::to_string(&session).map_err(|e| LoginError::Storage {
            detail: e.to_string(),
        })?;
        self.persist(STUDENT_KEY, serialized)?;
        self.events
            .publish(AppEvent::StudentLoginSuccess(session.clone()));
        Ok(LoginSuccess::Student(session))
    }

    fn complete_faculty(&mut self, reply: LoginReply) -> Result<LoginSuccess, LoginError> {
        let user = match reply {
            LoginReply::Accepted { user, .. } => user,
            LoginReply::Rejected { message } => {
                return Err(auth_error(message, FACULTY_AUTH_FALLBACK));
            }
        };

        self.persist(USER_KEY, user.raw().to_string())?;

        if user.role() == Some(TEACHER_ROLE) {
            self.events.publish(AppEvent::OpenFacultyPortal);
            Ok(LoginSuccess::FacultyPortal { user })
        } else {
            let message = format!(
                "Welcome {}! Student login successful!",
                user.name().unwrap_or_default()
            );
            Ok(LoginSuccess::Welcome { user, message })
        }
    }

    fn persist(&mut self, key: &str, value: String) -> Result<(), LoginError> {
        self.store.set(key, value).map_err(|e| {
            let detail = format!("{e:#}");
            tracing::error!(key, error = %detail, "failed to store session");
            LoginError::Storage { detail }
        })
    }

    /// Records `err` as the inline error and applies the CAPTCHA reset policy.
    fn fail(&mut self, err: LoginError) -> LoginError {
        self.error = Some(err.to_string());
        if err.resets_captcha() {
            self.regenerate_captcha();
            self.input.captcha.clear();
        }
        err
    }

    fn regenerate_captcha(&mut self) {
        self.captcha = Captcha::generate_with(&mut self.rng);
    }
}

fn auth_error(message: Option<String>, fallback: &str) -> LoginError {
    LoginError::Auth {
        message: message.unwrap_or_else(|| fallback.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use rand::SeedableRng;
    use serde_json::json;

    use super::*;
    use crate::captcha::{ALPHABET, LENGTH};
    use crate::events::EventSubscriber;
    use crate::storage::MemoryStore;

    /// Scripted `AuthApi` that records every request.
    #[derive(Default)]
    struct StubApi {
        replies: Mutex<VecDeque<Result<LoginReply, TransportError>>>,
        requests: Mutex<Vec<LoginRequest>>,
    }

    impl StubApi {
        fn replying(reply: Result<LoginReply, TransportError>) -> Self {
            let stub = Self::default();
            stub.replies.lock().unwrap().push_back(reply);
            stub
        }

        fn accepted(user: serde_json::Value) -> Self {
            Self::replying(Ok(LoginReply::Accepted {
                user: ServerUser::from_value(user).unwrap(),
                message: None,
            }))
        }

        fn requests(&self) -> Vec<LoginRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl AuthApi for StubApi {
        async fn login(&self, request: &LoginRequest) -> Result<LoginReply, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected login call")
        }
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> anyhow::Result<()> {
            anyhow::bail!("read-only storage")
        }

        fn remove(&mut self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }
    }

    fn dialog() -> (LoginDialog<MemoryStore>, EventSubscriber) {
        let events = EventBus::new();
        let subscriber = events.subscribe();
        let dialog = LoginDialog::with_rng(MemoryStore::new(), events, StdRng::seed_from_u64(7));
        (dialog, subscriber)
    }

    /// Opens the dialog in `category` with a correct (lowercased) CAPTCHA.
    fn filled<S: SessionStore>(dialog: &mut LoginDialog<S>, category: Category, id: &str, pw: &str) {
        dialog.open();
        assert!(dialog.select_category(category));
        dialog.set_identifier(id);
        dialog.set_password(pw);
        let response = dialog.captcha().as_str().to_lowercase();
        dialog.set_captcha_response(response);
    }

    fn assert_well_formed(captcha: &Captcha) {
        assert_eq!(captcha.as_str().len(), LENGTH);
        assert!(captcha.as_str().bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_open_resets_everything() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Faculty, "a@b.c", "pw");
        dialog.close();

        dialog.open();
        assert!(dialog.is_open());
        assert_eq!(dialog.category(), Category::Unselected);
        assert_eq!(dialog.input(), &CredentialInput::default());
        assert_eq!(dialog.error(), None);
        assert_well_formed(dialog.captcha());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Student.identifier_label(), "Student ID");
        assert_eq!(Category::Faculty.identifier_label(), "Email");
        assert_eq!(Category::Student.title(), "Student Login");
        assert_eq!(Category::Faculty.title(), "Faculty Login");
    }

    #[test]
    fn test_select_category_only_from_picker() {
        let (mut dialog, _events) = dialog();
        dialog.open();
        assert!(!dialog.select_category(Category::Unselected));
        assert!(dialog.select_category(Category::Student));
        assert!(!dialog.select_category(Category::Faculty));
        assert_eq!(dialog.category(), Category::Student);
    }

    #[test]
    fn test_back_clears_input_and_regenerates_captcha() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "pw");
        let before = dialog.captcha().clone();

        dialog.back();

        assert_eq!(dialog.category(), Category::Unselected);
        assert_eq!(dialog.input(), &CredentialInput::default());
        assert_ne!(dialog.captcha(), &before);
        assert_well_formed(dialog.captcha());
    }

    #[test]
    fn test_refresh_captcha_keeps_input() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "pw");
        let before = dialog.captcha().clone();

        dialog.refresh_captcha();

        assert_ne!(dialog.captcha(), &before);
        assert_eq!(dialog.input().id, "2335000001");
    }

    #[tokio::test]
    async fn test_missing_fields_fail_without_captcha_reset() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "");
        let before = dialog.captcha().clone();
        let api = StubApi::default();

        let err = dialog.submit(&api).await.unwrap_err();

        assert_eq!(err, LoginError::Validation(ValidationError::MissingFields));
        assert_eq!(dialog.error(), Some("Please fill all fields"));
        assert_eq!(dialog.captcha(), &before);
        assert!(!dialog.input().captcha.is_empty());
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_captcha_regenerates_and_skips_network() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "pw");
        dialog.set_captcha_response("!!!!!!");
        let before = dialog.captcha().clone();
        let api = StubApi::default();

        let err = dialog.submit(&api).await.unwrap_err();

        assert_eq!(err, LoginError::Validation(ValidationError::InvalidCaptcha));
        assert_eq!(dialog.error(), Some("Invalid CAPTCHA"));
        assert_ne!(dialog.captcha(), &before);
        assert_well_formed(dialog.captcha());
        assert_eq!(dialog.input().captcha, "");
        assert_eq!(dialog.input().id, "2335000001");
        assert_eq!(dialog.input().password, "pw");
        assert!(api.requests().is_empty());
        assert!(dialog.is_open());
    }

    #[tokio::test]
    async fn test_unselected_category_is_state_error() {
        let (mut dialog, _events) = dialog();
        dialog.open();
        dialog.set_identifier("x");
        dialog.set_password("y");
        let response = dialog.captcha().to_string();
        dialog.set_captcha_response(response.clone());
        let api = StubApi::default();

        let err = dialog.submit(&api).await.unwrap_err();

        assert_eq!(err, LoginError::State);
        assert_eq!(dialog.error(), Some("Please select a login type"));
        assert_eq!(dialog.captcha().as_str(), response);
        assert_eq!(dialog.input().captcha, response);
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_student_login_stores_record_and_publishes() {
        let (mut dialog, mut events) = dialog();
        filled(&mut dialog, Category::Student, "  2335000001 ", " secret ");
        let api = StubApi::accepted(json!({
            "role": "student",
            "name": "Asha Rao",
            "email": "asha@example.edu",
            "roll_number": "2335000001",
            "class_name": "BCA-3A"
        }));

        let success = dialog.submit(&api).await.unwrap();

        assert_eq!(
            api.requests(),
            vec![LoginRequest::Student {
                student_id: "2335000001".to_string(),
                password: "secret".to_string(),
            }]
        );
        let LoginSuccess::Student(session) = success else {
            panic!("expected student success");
        };
        assert_eq!(session.id.as_deref(), Some("2335000001"));
        assert!(!dialog.is_open());

        let stored = dialog.store().get(STUDENT_KEY).unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored["id"], "2335000001");
        assert_eq!(stored["program"], "BCA-3A");
        assert_eq!(stored["semester"], "V");
        assert_eq!(stored["batch"], "2023");

        assert_eq!(
            events.try_recv().unwrap(),
            AppEvent::StudentLoginSuccess(session)
        );
    }

    #[tokio::test]
    async fn test_student_flow_rejects_non_student_role() {
        let (mut dialog, mut events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "pw");
        let before = dialog.captcha().clone();
        let api = StubApi::accepted(json!({"role": "teacher", "name": "Dr. X"}));

        let err = dialog.submit(&api).await.unwrap_err();

        assert_eq!(
            err,
            LoginError::Auth {
                message: "Invalid Student ID or Password".to_string()
            }
        );
        assert!(dialog.is_open());
        assert_ne!(dialog.captcha(), &before);
        assert_eq!(dialog.input().captcha, "");
        assert_eq!(dialog.store().get(STUDENT_KEY).unwrap(), None);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_student_flow_wrong_role_uses_server_message() {
        let (mut dialog, mut events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "pw");
        let request = dialog.begin_submit().unwrap();
        let reply = LoginReply::from_value(json!({
            "ok": true,
            "user": {"role": "teacher", "name": "Dr. X"},
            "message": "Please use faculty login"
        }))
        .unwrap();

        let err = dialog.finish_submit(&request, Ok(reply)).unwrap_err();

        assert_eq!(
            err,
            LoginError::Auth {
                message: "Please use faculty login".to_string()
            }
        );
        assert_eq!(dialog.error(), Some("Please use faculty login"));
        assert!(dialog.is_open());
        assert_eq!(dialog.store().get(STUDENT_KEY).unwrap(), None);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rejection_uses_server_message() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "pw");
        let api = StubApi::replying(Ok(LoginReply::Rejected {
            message: Some("Account locked".to_string()),
        }));

        dialog.submit(&api).await.unwrap_err();

        assert_eq!(dialog.error(), Some("Account locked"));
    }

    #[tokio::test]
    async fn test_faculty_teacher_opens_portal() {
        let (mut dialog, mut events) = dialog();
        filled(&mut dialog, Category::Faculty, " x@school.edu", "pw ");
        let api = StubApi::accepted(json!({"role": "teacher", "name": "Dr. X"}));

        let success = dialog.submit(&api).await.unwrap();

        assert!(matches!(success, LoginSuccess::FacultyPortal { .. }));
        assert_eq!(
            api.requests(),
            vec![LoginRequest::Faculty {
                email: " x@school.edu".to_string(),
                password: "pw ".to_string(),
            }]
        );
        assert_eq!(events.try_recv().unwrap(), AppEvent::OpenFacultyPortal);
        assert!(events.try_recv().is_err());
        assert!(!dialog.is_open());

        let stored = dialog.store().get(USER_KEY).unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored, json!({"role": "teacher", "name": "Dr. X"}));
        assert_eq!(dialog.store().get(STUDENT_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_faculty_other_role_gets_welcome() {
        let (mut dialog, mut events) = dialog();
        filled(&mut dialog, Category::Faculty, "a@school.edu", "pw");
        let api = StubApi::accepted(json!({"role": "admin", "name": "Pat"}));

        let success = dialog.submit(&api).await.unwrap();

        let LoginSuccess::Welcome { message, .. } = success else {
            panic!("expected welcome");
        };
        assert_eq!(message, "Welcome Pat! Student login successful!");
        assert!(events.try_recv().is_err());
        assert!(dialog.store().get(USER_KEY).unwrap().is_some());
        assert!(!dialog.is_open());
    }

    #[tokio::test]
    async fn test_faculty_rejection_fallback() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Faculty, "a@school.edu", "pw");
        let api = StubApi::replying(Ok(LoginReply::Rejected { message: None }));

        dialog.submit(&api).await.unwrap_err();

        assert_eq!(dialog.error(), Some("Login failed"));
    }

    #[tokio::test]
    async fn test_network_failure_keeps_dialog_open() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "pw");
        let before = dialog.captcha().clone();
        let api = StubApi::replying(Err(TransportError::connect("connection refused")));

        let err = dialog.submit(&api).await.unwrap_err();

        assert!(matches!(err, LoginError::Network(_)));
        assert!(dialog.is_open());
        assert_eq!(dialog.error(), Some("Network error. Please try again."));
        assert_ne!(dialog.captcha(), &before);
        assert_eq!(dialog.input().captcha, "");
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let events = EventBus::new();
        let mut subscriber = events.subscribe();
        let mut dialog = LoginDialog::with_rng(ReadOnlyStore, events, StdRng::seed_from_u64(3));
        filled(&mut dialog, Category::Student, "2335000001", "pw");
        let api = StubApi::accepted(json!({"role": "student", "roll_number": "2335000001"}));

        let err = dialog.submit(&api).await.unwrap_err();

        assert!(matches!(err, LoginError::Storage { .. }));
        assert!(dialog.is_open());
        assert_eq!(dialog.input().captcha, "");
        assert!(subscriber.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_split_submit_applies_result_later() {
        let (mut dialog, _events) = dialog();
        filled(&mut dialog, Category::Student, "2335000001", "pw");

        let request = dialog.begin_submit().unwrap();
        assert!(dialog.is_open());

        let reply = LoginReply::Accepted {
            user: ServerUser::from_value(json!({"role": "student", "roll_number": "2335000001"}))
                .unwrap(),
            message: None,
        };
        dialog.finish_submit(&request, Ok(reply)).unwrap();
        assert!(!dialog.is_open());
    }
}
