//! Domain models for the syllabus store: Course (root document, keyed by
//! `courseId`), its embedded Modules and Units, and course outcomes.
//!
//! Sub-documents carry no identity of their own; a module or unit exists only
//! at its position inside the parent array, and replacing an array is a full
//! semantic replace.

use serde::{Deserialize, Serialize};

/// Year labels offered by the authoring form.
pub const YEARS: [&str; 4] = ["1st", "2nd", "3rd", "4th"];

/// Semester labels offered by the authoring form.
pub const SEMESTERS: [&str; 2] = ["1st", "2nd"];

/// Course category labels offered by the authoring form. The store does not
/// enforce membership; these exist for clients building pick lists.
pub const COURSE_CATEGORIES: [&str; 8] = [
    "Basic sciences",
    "Basic engineering",
    "Potential core",
    "Department elective",
    "Open elective",
    "Add on course",
    "Minor",
    "honour",
];

/// Course type labels offered by the authoring form.
pub const COURSE_TYPES: [&str; 3] = ["Skill based", "Entrepreneur", "employment"];

/// Bloom's taxonomy tag attached to a course outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomLevel {
    Apply,
    Analyze,
    Evaluate,
}

impl Default for BloomLevel {
    fn default() -> Self {
        BloomLevel::Apply
    }
}

impl BloomLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloomLevel::Apply => "apply",
            BloomLevel::Analyze => "analyze",
            BloomLevel::Evaluate => "evaluate",
        }
    }
}

/// One learning outcome row. `mapping` is the optional PO-mapping column that
/// only shows up in the exported syllabus table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOutcome {
    pub outcome: String,
    pub bloom_level: BloomLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<String>,
}

/// A topic entry inside a module, citing a textbook page range.
/// `page_from <= page_to` is suggested by the editor but not store-enforced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub selected_textbook: String,
    pub page_from: u32,
    pub page_to: u32,
    pub contents: String,
}

/// A syllabus subdivision owned by exactly one course. `number` is a display
/// ordinal, not guaranteed unique or contiguous. `duration` is an opaque
/// positive number (the editor has labeled it both weeks and hours).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub number: u32,
    pub duration: f64,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub practices: Vec<String>,
}

/// Root syllabus document. `credits` is computed client-side from the weighted
/// hour fields and stored as supplied; the store never recomputes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: String,
    pub year: String,
    pub semester: String,
    pub course_name: String,
    pub course_category: String,
    pub course_type: String,
    pub lecture_hours: f64,
    pub tutorial_hours: f64,
    pub practical_hours: f64,
    pub self_learning_hours: f64,
    pub course_description: String,
    pub prerequisites: String,
    #[serde(default)]
    pub course_outcomes: Vec<CourseOutcome>,
    pub textbooks: Vec<String>,
    pub reference_books: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub credits: f64,
    #[serde(default)]
    pub modules: Vec<Module>,
}
