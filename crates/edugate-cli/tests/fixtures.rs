//! Login backend fixtures for integration tests.

#![allow(dead_code)]

use edugate_core::captcha::Captcha;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::ResponseTemplate;

/// Seed passed through `EDUGATE_CAPTCHA_SEED`.
pub const CAPTCHA_SEED: u64 = 42;

/// Creates a temp EDUGATE_HOME directory for test isolation.
pub fn temp_edugate_home() -> TempDir {
    TempDir::new().expect("create temp edugate home")
}

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// The challenge `edugate login` prints for [`CAPTCHA_SEED`].
///
/// The dialog draws one challenge when built and the next one on open.
pub fn expected_captcha() -> String {
    let mut rng = StdRng::seed_from_u64(CAPTCHA_SEED);
    let _ = Captcha::generate_with(&mut rng);
    Captcha::generate_with(&mut rng).as_str().to_string()
}

/// Stdin for `edugate login`: password line, then CAPTCHA line.
pub fn login_stdin(password: &str, captcha: &str) -> String {
    format!("{password}\n{captcha}\n")
}

pub fn accepted(user: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "user": user }))
}

pub fn rejected(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "ok": false, "message": message }))
}

pub fn student_user() -> Value {
    json!({
        "id": 7,
        "name": "Asha Rao",
        "roll_number": "2335000001",
        "class_name": "10-A",
        "role": "student"
    })
}

pub fn teacher_user() -> Value {
    json!({
        "id": 3,
        "name": "Mr. Iyer",
        "email": "iyer@school.test",
        "role": "teacher"
    })
}
