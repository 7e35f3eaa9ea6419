//! Session records persisted after a successful login.

use serde::{Deserialize, Serialize};

use crate::api::ServerUser;

/// Semester recorded for every student session.
pub const DEFAULT_SEMESTER: &str = "V";

/// Batch recorded for every student session.
pub const DEFAULT_BATCH: &str = "2023";

/// Normalized student session, stored under [`crate::storage::STUDENT_KEY`].
///
/// `id` and `roll_number` both carry the server roll number and `program`
/// mirrors `class_name`. `semester` and `batch` are fixed placeholders, not
/// server data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub semester: String,
    pub batch: String,
}

impl StudentSession {
    pub fn from_user(user: &ServerUser) -> Self {
        let roll_number = user.roll_number();
        let class_name = user.class_name();
        Self {
            id: roll_number.clone(),
            name: user.name(),
            email: user.email(),
            roll_number,
            program: class_name.clone(),
            class_name,
            semester: DEFAULT_SEMESTER.to_string(),
            batch: DEFAULT_BATCH.to_string(),
        }
    }

    /// Best display label: name, then roll number.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.roll_number.as_deref())
            .unwrap_or("student")
    }
}
