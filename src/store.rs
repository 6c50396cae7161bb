//! Application state: the in-memory course document store.
//!
//! This module owns:
//!   - the course map (by `courseId`) and its insertion-order index
//!   - the optional JSON snapshot used for durability (DATA_PATH)
//!   - startup seeding from the optional TOML course bank
//!
//! Every operation is a single atomic mutation under the write guard;
//! concurrent writers to the same `courseId` race with last-write-wins
//! semantics. Snapshot writes are best-effort: a failed write is logged and
//! the in-memory document stands.

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::config::{load_course_bank, Settings};
use crate::domain::{Course, Module};
use crate::error::ApiError;
use crate::validate::{validate_course, validate_course_deep};

#[derive(Clone)]
pub struct AppState {
    pub by_id: Arc<RwLock<HashMap<String, Course>>>,
    pub order: Arc<RwLock<Vec<String>>>,
    data_path: Option<Arc<PathBuf>>,
}

impl AppState {
    /// Build state from settings: load the JSON snapshot if one exists, then
    /// seed from the TOML course bank (never overwriting snapshot entries).
    #[instrument(level = "info", skip_all)]
    pub fn new(settings: &Settings) -> Self {
        let mut id_map = HashMap::<String, Course>::new();
        let mut order = Vec::<String>::new();

        if let Some(path) = &settings.data_path {
            if path.exists() {
                match std::fs::read_to_string(path) {
                    Ok(s) => match serde_json::from_str::<Vec<Course>>(&s) {
                        Ok(docs) => {
                            info!(target: "course_store", path = %path.display(), count = docs.len(), "Loaded snapshot");
                            for c in docs {
                                if !id_map.contains_key(&c.course_id) {
                                    order.push(c.course_id.clone());
                                    id_map.insert(c.course_id.clone(), c);
                                }
                            }
                        }
                        Err(e) => {
                            error!(target: "course_store", path = %path.display(), error = %e, "Failed to parse snapshot; starting empty")
                        }
                    },
                    Err(e) => {
                        error!(target: "course_store", path = %path.display(), error = %e, "Failed to read snapshot; starting empty")
                    }
                }
            }
        }

        if let Some(bank_path) = &settings.bank_path {
            if let Some(bank) = load_course_bank(bank_path) {
                for c in bank.courses {
                    if id_map.contains_key(&c.course_id) {
                        continue;
                    }
                    if let Err(e) = validate_course_deep(&c) {
                        error!(target: "course_store", course_id = %c.course_id, error = %e, "Skipping bank course: failed validation");
                        continue;
                    }
                    order.push(c.course_id.clone());
                    id_map.insert(c.course_id.clone(), c);
                }
            }
        }

        // Inventory summary by year/semester.
        let mut count_by_slot: HashMap<(String, String), usize> = HashMap::new();
        for c in id_map.values() {
            *count_by_slot
                .entry((c.year.clone(), c.semester.clone()))
                .or_insert(0) += 1;
        }
        for ((year, semester), n) in count_by_slot {
            info!(target: "course_store", %year, %semester, courses = n, "Startup course inventory");
        }

        Self {
            by_id: Arc::new(RwLock::new(id_map)),
            order: Arc::new(RwLock::new(order)),
            data_path: settings.data_path.clone().map(Arc::new),
        }
    }

    /// Create a new course. Fails on schema violations (including embedded
    /// modules) and on a duplicate `courseId`. Persists the document verbatim.
    #[instrument(level = "info", skip(self, course), fields(course_id = %course.course_id))]
    pub async fn create(&self, course: Course) -> Result<Course, ApiError> {
        validate_course_deep(&course)?;
        let mut by_id = self.by_id.write().await;
        let mut order = self.order.write().await;
        if by_id.contains_key(&course.course_id) {
            warn!(target: "course_store", course_id = %course.course_id, "create rejected: duplicate courseId");
            return Err(ApiError::Conflict(course.course_id.clone()));
        }
        order.push(course.course_id.clone());
        by_id.insert(course.course_id.clone(), course.clone());
        self.persist(&by_id, &order);
        Ok(course)
    }

    /// Read-only lookup by `courseId`.
    #[instrument(level = "debug", skip(self), fields(%course_id))]
    pub async fn get(&self, course_id: &str) -> Result<Course, ApiError> {
        let by_id = self.by_id.read().await;
        by_id
            .get(course_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(course_id.to_string()))
    }

    /// Replace every field of an existing document with the supplied payload.
    /// No merge semantics: the caller must resend the full object. The
    /// payload's own `courseId` wins, so a replace may re-key the document
    /// (a duplicate target key is a conflict).
    #[instrument(level = "info", skip(self, course), fields(%course_id))]
    pub async fn replace_all(&self, course_id: &str, course: Course) -> Result<Course, ApiError> {
        validate_course(&course)?;
        let mut by_id = self.by_id.write().await;
        let mut order = self.order.write().await;
        if !by_id.contains_key(course_id) {
            return Err(ApiError::NotFound(course_id.to_string()));
        }
        if course.course_id != course_id {
            if by_id.contains_key(&course.course_id) {
                warn!(target: "course_store", course_id = %course.course_id, "replace rejected: target courseId already exists");
                return Err(ApiError::Conflict(course.course_id.clone()));
            }
            by_id.remove(course_id);
            if let Some(slot) = order.iter_mut().find(|id| id.as_str() == course_id) {
                *slot = course.course_id.clone();
            }
        }
        by_id.insert(course.course_id.clone(), course.clone());
        self.persist(&by_id, &order);
        Ok(course)
    }

    /// Replace only the `modules` array, leaving all other fields untouched.
    #[instrument(level = "info", skip(self, modules), fields(%course_id, modules = modules.len()))]
    pub async fn replace_modules(
        &self,
        course_id: &str,
        modules: Vec<Module>,
    ) -> Result<Course, ApiError> {
        let mut by_id = self.by_id.write().await;
        let order = self.order.write().await;
        let updated = {
            let course = by_id
                .get_mut(course_id)
                .ok_or_else(|| ApiError::NotFound(course_id.to_string()))?;
            course.modules = modules;
            course.clone()
        };
        self.persist(&by_id, &order);
        Ok(updated)
    }

    /// Every stored course, in insertion order. Filtering and sorting happen
    /// client-side.
    #[instrument(level = "debug", skip(self))]
    pub async fn list(&self) -> Vec<Course> {
        let by_id = self.by_id.read().await;
        let order = self.order.read().await;
        order.iter().filter_map(|id| by_id.get(id).cloned()).collect()
    }

    /// Rewrite the JSON snapshot after a successful mutation. Best effort:
    /// failures are logged, never propagated.
    fn persist(&self, by_id: &HashMap<String, Course>, order: &[String]) {
        let Some(path) = &self.data_path else { return };
        let docs: Vec<&Course> = order.iter().filter_map(|id| by_id.get(id)).collect();
        match serde_json::to_string_pretty(&docs) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path.as_path(), json) {
                    error!(target: "course_store", path = %path.display(), error = %e, "Snapshot write failed");
                }
            }
            Err(e) => {
                error!(target: "course_store", error = %e, "Snapshot serialization failed");
            }
        }
    }
}
