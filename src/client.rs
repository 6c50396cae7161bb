//! Authoring-client plumbing: the REST API wrapper, the multi-step editing
//! session, and the pure list-view helpers (filter/sort).
//!
//! Every user action issues at most one in-flight call and awaits it; on
//! failure the local draft is left untouched and the error is surfaced to the
//! caller, never swallowed.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::domain::{Course, Module};
use crate::draft::{default_modules, normalize_practices, CourseDraft};
use crate::pdf::{self, SyllabusPdf};
use crate::protocol::{CourseOut, CoursesOut, CreatedOut, ErrorOut, ModulesIn};
use crate::util::trunc_for_log;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or client-side failure to reach the API.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a failure envelope.
    #[error("{0}")]
    Api(String),

    /// A step was attempted before any course was loaded into the session.
    #[error("no course loaded")]
    NoCourse,
}

/// Thin wrapper over the course API. One method per endpoint; each decodes
/// the uniform `{success, ...}` envelope.
#[derive(Clone, Debug)]
pub struct CourseApi {
    base_url: String,
    http: reqwest::Client,
}

impl CourseApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }
        let body = resp.text().await.unwrap_or_default();
        error!(target: "syllabus_client", %status, body = %trunc_for_log(&body, 300), "API call failed");
        let message = serde_json::from_str::<ErrorOut>(&body)
            .map(|e| e.error.unwrap_or(e.message))
            .unwrap_or_else(|_| format!("unexpected status {status}"));
        Err(ClientError::Api(message))
    }

    /// POST `/api/courses`; returns the server-confirmed `courseId`.
    #[instrument(level = "info", skip(self, course), fields(course_id = %course.course_id))]
    pub async fn create(&self, course: &Course) -> Result<String, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/courses"))
            .json(course)
            .send()
            .await?;
        let out: CreatedOut = Self::decode(resp).await?;
        info!(target: "syllabus_client", course_id = %out.course_id, "course created");
        Ok(out.course_id)
    }

    /// GET `/api/courses/:courseId`.
    #[instrument(level = "info", skip(self))]
    pub async fn get(&self, course_id: &str) -> Result<Course, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/courses/{course_id}")))
            .send()
            .await?;
        let out: CourseOut = Self::decode(resp).await?;
        Ok(out.course)
    }

    /// PUT `/api/courses/:courseId` with the full document.
    #[instrument(level = "info", skip(self, course))]
    pub async fn replace_all(
        &self,
        course_id: &str,
        course: &Course,
    ) -> Result<Course, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/courses/{course_id}")))
            .json(course)
            .send()
            .await?;
        let out: CourseOut = Self::decode(resp).await?;
        Ok(out.course)
    }

    /// PUT `/api/courses/:courseId/modules` with a modules-only payload.
    #[instrument(level = "info", skip(self, modules), fields(modules = modules.len()))]
    pub async fn replace_modules(
        &self,
        course_id: &str,
        modules: Vec<Module>,
    ) -> Result<Course, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/courses/{course_id}/modules")))
            .json(&ModulesIn { modules })
            .send()
            .await?;
        let out: CourseOut = Self::decode(resp).await?;
        Ok(out.course)
    }

    /// GET `/api/courses`.
    #[instrument(level = "info", skip(self))]
    pub async fn list(&self) -> Result<Vec<Course>, ClientError> {
        let resp = self.http.get(self.url("/api/courses")).send().await?;
        let out: CoursesOut = Self::decode(resp).await?;
        Ok(out.courses)
    }
}

/// The three authoring screens, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthoringStep {
    BasicInfo,
    ModuleDetails,
    Preview,
}

/// Explicit session object carried between the authoring screens: the draft
/// being edited, the module editor's working copy, and the server-confirmed
/// document once one exists. A step transition happens only after a
/// successful API call; on failure everything local stays as it was.
#[derive(Debug)]
pub struct AuthoringSession {
    pub step: AuthoringStep,
    pub draft: CourseDraft,
    pub modules: Vec<Module>,
    course: Option<Course>,
}

impl AuthoringSession {
    pub fn new() -> Self {
        Self {
            step: AuthoringStep::BasicInfo,
            draft: CourseDraft::new(),
            modules: default_modules(),
            course: None,
        }
    }

    /// The canonical stored document, if one has been loaded or saved.
    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    /// Submit the basic-info draft as a Create call. On success the session
    /// advances to module editing with the server-confirmed course.
    pub async fn submit_basic_info(&mut self, api: &CourseApi) -> Result<String, ClientError> {
        let payload = self.draft.clone().into_course();
        let course_id = api.create(&payload).await?;
        let stored = api.get(&course_id).await?;
        if !stored.modules.is_empty() {
            self.modules = stored.modules.clone();
            normalize_practices(&mut self.modules);
        }
        self.course = Some(stored);
        self.step = AuthoringStep::ModuleDetails;
        Ok(course_id)
    }

    /// Load an existing course into the session (the module editor's search
    /// box) and jump to module editing.
    pub async fn load_course(&mut self, api: &CourseApi, course_id: &str) -> Result<(), ClientError> {
        let stored = api.get(course_id).await?;
        self.draft = CourseDraft::from_course(stored.clone());
        self.modules = if stored.modules.is_empty() {
            default_modules()
        } else {
            let mut modules = stored.modules.clone();
            normalize_practices(&mut modules);
            modules
        };
        self.course = Some(stored);
        self.step = AuthoringStep::ModuleDetails;
        Ok(())
    }

    /// Save the module editor's working copy: a full-document replace of the
    /// loaded course with the edited modules attached.
    pub async fn save_modules(&mut self, api: &CourseApi) -> Result<(), ClientError> {
        let current = self.course.as_ref().ok_or(ClientError::NoCourse)?;
        let mut updated = current.clone();
        updated.modules = self.modules.clone();
        let stored = api.replace_all(&current.course_id, &updated).await?;
        self.course = Some(stored);
        Ok(())
    }

    /// Advance to the preview screen; only possible once a course is loaded.
    pub fn preview(&mut self) -> Result<&Course, ClientError> {
        match self.course {
            Some(ref course) => {
                self.step = AuthoringStep::Preview;
                Ok(course)
            }
            None => Err(ClientError::NoCourse),
        }
    }

    /// Export the currently loaded course (with the working module copy) as
    /// a syllabus layout. Pure: session state is not modified.
    pub fn export_pdf(&self) -> Result<SyllabusPdf, ClientError> {
        let current = self.course.as_ref().ok_or(ClientError::NoCourse)?;
        let mut snapshot = current.clone();
        snapshot.modules = self.modules.clone();
        Ok(pdf::render(&snapshot))
    }
}

impl Default for AuthoringSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort direction for the course list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// The list view's local filtering and sorting: optional year/semester
/// equality filters, then lexicographic `courseId` order.
pub fn filter_and_sort(
    courses: &[Course],
    year: Option<&str>,
    semester: Option<&str>,
    order: SortOrder,
) -> Vec<Course> {
    let mut result: Vec<Course> = courses
        .iter()
        .filter(|c| year.map_or(true, |y| c.year == y))
        .filter(|c| semester.map_or(true, |s| c.semester == s))
        .cloned()
        .collect();
    result.sort_by(|a, b| match order {
        SortOrder::Asc => a.course_id.cmp(&b.course_id),
        SortOrder::Desc => b.course_id.cmp(&a.course_id),
    });
    result
}

/// Distinct year labels in first-seen order, for the filter chips.
pub fn distinct_years(courses: &[Course]) -> Vec<String> {
    let mut years = Vec::new();
    for c in courses {
        if !years.contains(&c.year) {
            years.push(c.year.clone());
        }
    }
    years
}

/// Distinct semester labels in first-seen order.
pub fn distinct_semesters(courses: &[Course]) -> Vec<String> {
    let mut semesters = Vec::new();
    for c in courses {
        if !semesters.contains(&c.semester) {
            semesters.push(c.semester.clone());
        }
    }
    semesters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, year: &str, semester: &str) -> Course {
        Course {
            course_id: id.into(),
            year: year.into(),
            semester: semester.into(),
            course_name: format!("Course {id}"),
            course_category: "Potential core".into(),
            course_type: "Skill based".into(),
            lecture_hours: 3.0,
            tutorial_hours: 0.0,
            practical_hours: 2.0,
            self_learning_hours: 0.0,
            course_description: "desc".into(),
            prerequisites: "none".into(),
            course_outcomes: vec![],
            textbooks: vec!["Book".into()],
            reference_books: vec!["Ref".into()],
            skills: vec![],
            credits: 4.0,
            modules: vec![],
        }
    }

    #[test]
    fn filter_by_year_and_semester() {
        let courses = vec![
            course("CS300", "3rd", "1st"),
            course("CS100", "1st", "1st"),
            course("CS101", "1st", "2nd"),
        ];
        let filtered = filter_and_sort(&courses, Some("1st"), None, SortOrder::Asc);
        let ids: Vec<&str> = filtered.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["CS100", "CS101"]);

        let filtered = filter_and_sort(&courses, Some("1st"), Some("2nd"), SortOrder::Asc);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].course_id, "CS101");
    }

    #[test]
    fn sorts_lexicographically_both_ways() {
        let courses = vec![
            course("CS300", "3rd", "1st"),
            course("CS100", "1st", "1st"),
        ];
        let asc = filter_and_sort(&courses, None, None, SortOrder::Asc);
        assert_eq!(asc[0].course_id, "CS100");
        let desc = filter_and_sort(&courses, None, None, SortOrder::Desc);
        assert_eq!(desc[0].course_id, "CS300");
    }

    #[test]
    fn distinct_labels_keep_first_seen_order() {
        let courses = vec![
            course("A", "3rd", "2nd"),
            course("B", "1st", "1st"),
            course("C", "3rd", "2nd"),
        ];
        assert_eq!(distinct_years(&courses), vec!["3rd", "1st"]);
        assert_eq!(distinct_semesters(&courses), vec!["2nd", "1st"]);
    }

    #[test]
    fn session_guards_steps_without_a_course() {
        let mut session = AuthoringSession::new();
        assert_eq!(session.step, AuthoringStep::BasicInfo);
        assert!(matches!(session.preview(), Err(ClientError::NoCourse)));
        assert!(matches!(session.export_pdf(), Err(ClientError::NoCourse)));
        assert_eq!(session.modules, default_modules());
    }
}
