//! Backend endpoint registry.
//!
//! Maps logical operation names to absolute URLs under a base URL. The base
//! URL is taken as-is: a malformed base produces malformed endpoint URLs.

use crate::config::Config;

/// Resolved backend endpoints for one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

/// A named endpoint as listed by [`Endpoints::named`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEndpoint {
    pub name: &'static str,
    pub url: String,
}

/// Placeholder used when listing parameterized endpoints.
const ID_PLACEHOLDER: &str = "{id}";

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.effective_api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn login(&self) -> String {
        self.url("/api/auth/login")
    }

    pub fn student_assignments(&self, student_id: &str) -> String {
        self.url(&format!("/api/student/{student_id}/assignments"))
    }

    pub fn submit_assignment(&self) -> String {
        self.url("/api/assignments/submit")
    }

    pub fn student_attendance(&self, student_id: &str) -> String {
        self.url(&format!("/api/attendance/student/{student_id}"))
    }

    pub fn student_exam_results(&self, student_id: &str) -> String {
        self.url(&format!("/api/student/{student_id}/exam-results"))
    }

    pub fn teacher_subjects(&self, teacher_id: &str) -> String {
        self.url(&format!("/api/teacher/{teacher_id}/subjects"))
    }

    pub fn teacher_classes(&self, teacher_id: &str) -> String {
        self.url(&format!("/api/teacher/{teacher_id}/classes"))
    }

    pub fn teacher_assignments(&self, teacher_id: &str) -> String {
        self.url(&format!("/api/teacher/{teacher_id}/assignments"))
    }

    pub fn teacher_exams(&self, teacher_id: &str) -> String {
        self.url(&format!("/api/teacher/{teacher_id}/exams"))
    }

    pub fn create_assignment(&self) -> String {
        self.url("/api/assignments/create")
    }

    pub fn create_class(&self) -> String {
        self.url("/api/classes/create")
    }

    pub fn create_exam(&self) -> String {
        self.url("/api/exams/create")
    }

    pub fn mark_attendance(&self) -> String {
        self.url("/api/attendance/mark")
    }

    pub fn grade_assignment(&self) -> String {
        self.url("/api/assignments/grade")
    }

    pub fn upload_exam_marks(&self) -> String {
        self.url("/api/exams/upload-marks")
    }

    pub fn students(&self) -> String {
        self.url("/api/students")
    }

    pub fn class_attendance(&self, class_id: &str) -> String {
        self.url(&format!("/api/attendance/class/{class_id}"))
    }

    pub fn exam_results(&self, exam_id: &str) -> String {
        self.url(&format!("/api/exams/{exam_id}/results"))
    }

    /// Lists every endpoint; parameterized ones render an `{id}` placeholder.
    pub fn named(&self) -> Vec<NamedEndpoint> {
        let id = ID_PLACEHOLDER;
        let entries = [
            ("login", self.login()),
            ("student_assignments", self.student_assignments(id)),
            ("submit_assignment", self.submit_assignment()),
            ("student_attendance", self.student_attendance(id)),
            ("student_exam_results", self.student_exam_results(id)),
            ("teacher_subjects", self.teacher_subjects(id)),
            ("teacher_classes", self.teacher_classes(id)),
            ("teacher_assignments", self.teacher_assignments(id)),
            ("teacher_exams", self.teacher_exams(id)),
            ("create_assignment", self.create_assignment()),
            ("create_class", self.create_class()),
            ("create_exam", self.create_exam()),
            ("mark_attendance", self.mark_attendance()),
            ("grade_assignment", self.grade_assignment()),
            ("upload_exam_marks", self.upload_exam_marks()),
            ("students", self.students()),
            ("class_attendance", self.class_attendance(id)),
            ("exam_results", self.exam_results(id)),
        ];
        entries
            .into_iter()
            .map(|(name, url)| NamedEndpoint { name, url })
            .collect()
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
