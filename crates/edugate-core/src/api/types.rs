use serde::Serialize;
use serde_json::Value;

use super::errors::TransportError;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LoginRequest {
    Student { student_id: String, password: String },
    Faculty { email: String, password: String },
}

impl LoginRequest {
    /// Identifier sent to the server (student ID or email).
    pub fn identifier(&self) -> &str {
        match self {
            LoginRequest::Student { student_id, .. } => student_id,
            LoginRequest::Faculty { email, .. } => email,
        }
    }
}

/// User object returned on a successful login.
///
/// Keeps the raw JSON object so it can be stored unmodified, with typed
/// accessors for the fields the client reads. Numbers are accepted where
/// strings are expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUser {
    raw: Value,
}

impl ServerUser {
    /// Wraps a JSON value; only objects are accepted.
    pub fn from_value(raw: Value) -> Option<Self> {
        raw.is_object().then_some(Self { raw })
    }

    pub fn role(&self) -> Option<&str> {
        self.raw.get("role").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<String> {
        self.text_field("name")
    }

    pub fn email(&self) -> Option<String> {
        self.text_field("email")
    }

    pub fn roll_number(&self) -> Option<String> {
        self.text_field("roll_number")
    }

    pub fn class_name(&self) -> Option<String> {
        self.text_field("class_name")
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    fn text_field(&self, key: &str) -> Option<String> {
        match self.raw.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Login reply, discriminated on the `ok` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginReply {
    /// `message` is kept for callers that still refuse the user.
    Accepted {
        user: ServerUser,
        message: Option<String>,
    },
    Rejected { message: Option<String> },
}

impl LoginReply {
    /// Validates a response body.
    ///
    /// Only `ok: true` counts as success, and then `user` must be an object.
    /// A missing or non-true `ok` is a rejection. Both variants carry the
    /// server message; empty messages count as absent.
    ///
    /// # Errors
    /// Returns a parse error if the body is not JSON, is not an object, or is
    /// accepted without a user object.
    pub fn from_body(body: &str) -> Result<Self, TransportError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| TransportError::parse(format!("invalid JSON body: {e}")))?;
        Self::from_value(value)
    }

    /// Validates an already-parsed body. See [`LoginReply::from_body`].
    ///
    /// # Errors
    /// Returns a parse error on an unexpected shape.
    pub fn from_value(mut value: Value) -> Result<Self, TransportError> {
        let Some(object) = value.as_object_mut() else {
            return Err(TransportError::parse("response body is not a JSON object"));
        };

        let message = object
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        if object.get("ok").and_then(Value::as_bool) == Some(true) {
            let user = object
                .remove("user")
                .and_then(ServerUser::from_value)
                .ok_or_else(|| TransportError::parse("accepted login without a user object"))?;
            return Ok(LoginReply::Accepted { user, message });
        }

        Ok(LoginReply::Rejected { message })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::TransportErrorKind;

    #[test]
    fn test_request_bodies() {
        let student = LoginRequest::Student {
            student_id: "2335000001".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&student).unwrap(),
            json!({"student_id": "2335000001", "password": "pw"})
        );

        let faculty = LoginRequest::Faculty {
            email: "x@school.edu".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&faculty).unwrap(),
            json!({"email": "x@school.edu", "password": "pw"})
        );
        assert_eq!(faculty.identifier(), "x@school.edu");
    }

    #[test]
    fn test_accepted_reply_keeps_raw_user() {
        let reply = LoginReply::from_body(
            r#"{"ok":true,"user":{"role":"teacher","name":"Dr. X","dept":"CS"}}"#,
        )
        .unwrap();

        let LoginReply::Accepted { user, message } = reply else {
            panic!("expected accepted reply");
        };
        assert_eq!(message, None);
        assert_eq!(user.role(), Some("teacher"));
        assert_eq!(user.name().as_deref(), Some("Dr. X"));
        assert_eq!(
            user.raw(),
            &json!({"role": "teacher", "name": "Dr. X", "dept": "CS"})
        );
    }

    #[test]
    fn test_rejected_reply_messages() {
        assert_eq!(
            LoginReply::from_body(r#"{"ok":false,"message":"Wrong password"}"#).unwrap(),
            LoginReply::Rejected {
                message: Some("Wrong password".to_string())
            }
        );
        assert_eq!(
            LoginReply::from_body(r#"{"ok":false,"message":""}"#).unwrap(),
            LoginReply::Rejected { message: None }
        );
        assert_eq!(
            LoginReply::from_body(r#"{"error":"boom"}"#).unwrap(),
            LoginReply::Rejected { message: None }
        );
    }

    #[test]
    fn test_accepted_reply_keeps_message() {
        let reply = LoginReply::from_body(
            r#"{"ok":true,"user":{"role":"teacher"},"message":"Please use faculty login"}"#,
        )
        .unwrap();

        let LoginReply::Accepted { message, .. } = reply else {
            panic!("expected accepted reply");
        };
        assert_eq!(message.as_deref(), Some("Please use faculty login"));
    }

    #[test]
    fn test_only_literal_true_is_success() {
        for body in [
            r#"{"ok":1,"user":{"role":"student"},"message":"m"}"#,
            r#"{"ok":"yes","user":{"role":"student"},"message":"m"}"#,
        ] {
            assert_eq!(
                LoginReply::from_body(body).unwrap(),
                LoginReply::Rejected {
                    message: Some("m".to_string())
                },
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_malformed_replies_are_parse_errors() {
        for body in ["<html>502</html>", "[1,2]", r#"{"ok":true}"#, r#"{"ok":true,"user":"x"}"#] {
            let err = LoginReply::from_body(body).unwrap_err();
            assert_eq!(err.kind, TransportErrorKind::Parse, "body: {body}");
        }
    }

    #[test]
    fn test_numeric_fields_read_as_text() {
        let user = ServerUser::from_value(json!({"roll_number": 2_335_000_001_u64})).unwrap();
        assert_eq!(user.roll_number().as_deref(), Some("2335000001"));
        assert_eq!(user.role(), None);
    }
}
