//! Public protocol structs for the HTTP API (serde ready).
//!
//! Every response uses the same envelope shape: `{success: bool, ...}`. The
//! structs derive both Serialize and Deserialize so the server handlers and
//! the authoring client share one wire definition.

use serde::{Deserialize, Serialize};

use crate::domain::{Course, Module};

/// 201 response to a successful Create.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOut {
    pub success: bool,
    pub course_id: String,
    pub message: String,
}

/// 200 response carrying a single course document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseOut {
    pub success: bool,
    pub course: Course,
}

/// 200 response to List: every stored course, insertion order.
#[derive(Debug, Serialize, Deserialize)]
pub struct CoursesOut {
    pub success: bool,
    pub courses: Vec<Course>,
}

/// Body of the modules-only replace: `PUT /api/courses/:courseId/modules`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModulesIn {
    pub modules: Vec<Module>,
}

/// Failure envelope. `message` is the stable user-facing string; `error`
/// carries the underlying diagnostic when one exists.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthOut {
    pub ok: bool,
}
