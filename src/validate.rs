//! Write-time schema validation for Course documents.
//!
//! Mirrors the persistence schema: required strings must be non-empty, hour
//! fields non-negative, page numbers and durations at least 1, and the two
//! book lists must each hold at least one entry. Cross-field relationships
//! (`pageFrom <= pageTo`, `selectedTextbook` membership in `textbooks`) are
//! editor suggestions and deliberately not checked here.

use crate::domain::{Course, Module};
use crate::error::ApiError;

fn required(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), ApiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::Validation(format!("{field} must be a non-negative number")));
    }
    Ok(())
}

/// Validate the top-level fields of a course document. Used by both Create
/// and ReplaceAll.
pub fn validate_course(course: &Course) -> Result<(), ApiError> {
    required("courseId", &course.course_id)?;
    required("year", &course.year)?;
    required("semester", &course.semester)?;
    required("courseName", &course.course_name)?;
    required("courseCategory", &course.course_category)?;
    required("courseType", &course.course_type)?;
    non_negative("lectureHours", course.lecture_hours)?;
    non_negative("tutorialHours", course.tutorial_hours)?;
    non_negative("practicalHours", course.practical_hours)?;
    non_negative("selfLearningHours", course.self_learning_hours)?;
    required("courseDescription", &course.course_description)?;
    required("prerequisites", &course.prerequisites)?;
    for (i, co) in course.course_outcomes.iter().enumerate() {
        required(&format!("courseOutcomes[{i}].outcome"), &co.outcome)?;
    }
    if course.textbooks.is_empty() {
        return Err(ApiError::Validation("At least one textbook is required".into()));
    }
    if course.reference_books.is_empty() {
        return Err(ApiError::Validation(
            "At least one reference book is required".into(),
        ));
    }
    if !course.credits.is_finite() {
        return Err(ApiError::Validation("credits must be a number".into()));
    }
    Ok(())
}

/// Validate one module sub-document (including its units).
pub fn validate_module(index: usize, module: &Module) -> Result<(), ApiError> {
    if !module.duration.is_finite() || module.duration < 1.0 {
        return Err(ApiError::Validation(format!(
            "modules[{index}].duration must be at least 1"
        )));
    }
    for (u, unit) in module.units.iter().enumerate() {
        required(&format!("modules[{index}].units[{u}].name"), &unit.name)?;
        required(
            &format!("modules[{index}].units[{u}].selectedTextbook"),
            &unit.selected_textbook,
        )?;
        required(&format!("modules[{index}].units[{u}].contents"), &unit.contents)?;
        if unit.page_from < 1 {
            return Err(ApiError::Validation(format!(
                "modules[{index}].units[{u}].pageFrom must be at least 1"
            )));
        }
        if unit.page_to < 1 {
            return Err(ApiError::Validation(format!(
                "modules[{index}].units[{u}].pageTo must be at least 1"
            )));
        }
    }
    Ok(())
}

/// Full-document validation used by Create: top-level fields plus every
/// embedded module. Updates skip the module pass, matching the store's
/// replace semantics.
pub fn validate_course_deep(course: &Course) -> Result<(), ApiError> {
    validate_course(course)?;
    for (i, module) in course.modules.iter().enumerate() {
        validate_module(i, module)?;
    }
    Ok(())
}
