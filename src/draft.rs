//! Client-side draft editing: the in-memory mirror of a Course being authored,
//! reducer-style list edits, and the derived credits computation.
//!
//! Every edit replaces exactly one field or one element of an array field,
//! preserving all others. Required lists (outcomes, textbooks, reference
//! books) guard removal so they can never be emptied from the editor.

use crate::domain::{Course, CourseOutcome, Module, Unit};

/// Derived credits: lecture hours count fully, tutorial and practical hours
/// count half, self-learning hours not at all.
pub fn credits_for(lecture_hours: f64, tutorial_hours: f64, practical_hours: f64) -> f64 {
    lecture_hours * 1.0 + tutorial_hours * 0.5 + practical_hours * 0.5
}

/// Unsaved in-memory representation of a Course being edited. Identical to
/// `Course` minus `credits`, which is always derived and never edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseDraft {
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
    pub course_outcomes: Vec<CourseOutcome>,
    pub textbooks: Vec<String>,
    pub reference_books: Vec<String>,
    pub skills: Vec<String>,
    pub modules: Vec<Module>,
}

impl CourseDraft {
    /// A fresh draft the way the authoring form starts: one blank entry in
    /// each editable list.
    pub fn new() -> Self {
        Self {
            course_outcomes: vec![CourseOutcome::default()],
            textbooks: vec![String::new()],
            reference_books: vec![String::new()],
            skills: vec![String::new()],
            ..Self::default()
        }
    }

    /// Recomputed on every render; never independently editable.
    pub fn credits(&self) -> f64 {
        credits_for(self.lecture_hours, self.tutorial_hours, self.practical_hours)
    }

    /// Map the draft plus computed credits to a full Course payload for a
    /// Create or Replace call.
    pub fn into_course(self) -> Course {
        let credits = self.credits();
        Course {
            course_id: self.course_id,
            year: self.year,
            semester: self.semester,
            course_name: self.course_name,
            course_category: self.course_category,
            course_type: self.course_type,
            lecture_hours: self.lecture_hours,
            tutorial_hours: self.tutorial_hours,
            practical_hours: self.practical_hours,
            self_learning_hours: self.self_learning_hours,
            course_description: self.course_description,
            prerequisites: self.prerequisites,
            course_outcomes: self.course_outcomes,
            textbooks: self.textbooks,
            reference_books: self.reference_books,
            skills: self.skills,
            credits,
            modules: self.modules,
        }
    }

    /// Rebuild a draft from a server-confirmed document (stored credits are
    /// dropped; the draft always rederives them).
    pub fn from_course(course: Course) -> Self {
        Self {
            course_id: course.course_id,
            year: course.year,
            semester: course.semester,
            course_name: course.course_name,
            course_category: course.course_category,
            course_type: course.course_type,
            lecture_hours: course.lecture_hours,
            tutorial_hours: course.tutorial_hours,
            practical_hours: course.practical_hours,
            self_learning_hours: course.self_learning_hours,
            course_description: course.course_description,
            prerequisites: course.prerequisites,
            course_outcomes: course.course_outcomes,
            textbooks: course.textbooks,
            reference_books: course.reference_books,
            skills: course.skills,
            modules: course.modules,
        }
    }
}

/// Append a default-empty element to a string list.
pub fn push_entry(list: &mut Vec<String>) {
    list.push(String::new());
}

/// Replace the element at `index`, preserving all others. Returns false
/// (list unchanged) when the index is out of range.
pub fn update_entry(list: &mut [String], index: usize, value: impl Into<String>) -> bool {
    match list.get_mut(index) {
        Some(slot) => {
            *slot = value.into();
            true
        }
        None => false,
    }
}

/// Remove the element at `index`, keeping the remaining elements in their
/// original relative order. Guarded: a no-op when only one element remains,
/// so a required list can never be emptied from the editor.
pub fn remove_entry(list: &mut Vec<String>, index: usize) -> bool {
    if list.len() <= 1 || index >= list.len() {
        return false;
    }
    list.remove(index);
    true
}

/// Append a blank outcome row.
pub fn push_outcome(outcomes: &mut Vec<CourseOutcome>) {
    outcomes.push(CourseOutcome::default());
}

/// Remove the outcome at `index`, guarded like `remove_entry`.
pub fn remove_outcome(outcomes: &mut Vec<CourseOutcome>, index: usize) -> bool {
    if outcomes.len() <= 1 || index >= outcomes.len() {
        return false;
    }
    outcomes.remove(index);
    true
}

fn blank_unit() -> Unit {
    Unit {
        name: String::new(),
        selected_textbook: String::new(),
        page_from: 1,
        page_to: 1,
        contents: String::new(),
    }
}

/// The module editor's starting layout: module 1 with two blank units,
/// module 2 with three, each with a single blank practice entry.
pub fn default_modules() -> Vec<Module> {
    vec![
        Module {
            number: 1,
            duration: 0.0,
            units: vec![blank_unit(), blank_unit()],
            practices: vec![String::new()],
        },
        Module {
            number: 2,
            duration: 0.0,
            units: vec![blank_unit(), blank_unit(), blank_unit()],
            practices: vec![String::new()],
        },
    ]
}

/// Fetched courses may carry modules without practices; refill each empty
/// practices array with one blank entry so the editor has a row to show.
pub fn normalize_practices(modules: &mut [Module]) {
    for module in modules {
        if module.practices.is_empty() {
            module.practices.push(String::new());
        }
    }
}

/// Mutable access to one unit by module/unit position.
pub fn unit_mut(modules: &mut [Module], module_index: usize, unit_index: usize) -> Option<&mut Unit> {
    modules.get_mut(module_index)?.units.get_mut(unit_index)
}

/// Set one module's duration. Returns false when the index is out of range.
pub fn set_module_duration(modules: &mut [Module], module_index: usize, duration: f64) -> bool {
    match modules.get_mut(module_index) {
        Some(module) => {
            module.duration = duration;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_weight_hours_correctly() {
        assert_eq!(credits_for(3.0, 1.0, 2.0), 4.5);
        assert_eq!(credits_for(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn draft_attaches_computed_credits_on_submit() {
        let mut draft = CourseDraft::new();
        draft.lecture_hours = 3.0;
        draft.tutorial_hours = 1.0;
        draft.practical_hours = 2.0;
        draft.self_learning_hours = 4.0;
        let course = draft.into_course();
        assert_eq!(course.credits, 4.5);
    }

    #[test]
    fn removal_keeps_relative_order() {
        let mut books = vec!["a".to_string(), "b".into(), "c".into(), "d".into()];
        assert!(remove_entry(&mut books, 1));
        assert_eq!(books, vec!["a", "c", "d"]);
    }

    #[test]
    fn removal_is_rejected_on_last_element() {
        let mut books = vec!["only".to_string()];
        assert!(!remove_entry(&mut books, 0));
        assert_eq!(books, vec!["only"]);
    }

    #[test]
    fn update_out_of_range_is_a_no_op() {
        let mut books = vec!["a".to_string()];
        assert!(!update_entry(&mut books, 5, "x"));
        assert_eq!(books, vec!["a"]);
    }

    #[test]
    fn default_modules_match_the_editor_layout() {
        let modules = default_modules();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].number, 1);
        assert_eq!(modules[0].units.len(), 2);
        assert_eq!(modules[1].units.len(), 3);
        assert_eq!(modules[0].practices, vec![String::new()]);
    }

    #[test]
    fn normalize_refills_missing_practices() {
        let mut modules = default_modules();
        modules[1].practices.clear();
        normalize_practices(&mut modules);
        assert_eq!(modules[1].practices, vec![String::new()]);
        // Non-empty practices are left alone.
        assert_eq!(modules[0].practices.len(), 1);
    }

    #[test]
    fn unit_edits_replace_one_field_only() {
        let mut modules = default_modules();
        let unit = unit_mut(&mut modules, 0, 1).unwrap();
        unit.name = "Trees".into();
        assert_eq!(modules[0].units[1].name, "Trees");
        assert_eq!(modules[0].units[0].name, "");
        assert!(unit_mut(&mut modules, 5, 0).is_none());
    }
}
