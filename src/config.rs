//! Runtime settings from the environment, plus the optional TOML course bank.
//!
//! Env variables:
//!   PORT              : u16 (default 5000)
//!   DATA_PATH         : JSON snapshot file for durability (optional)
//!   COURSE_BANK_PATH  : TOML file with `[[courses]]` entries seeded at startup
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Course;

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub port: u16,
    pub data_path: Option<PathBuf>,
    pub bank_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        Self {
            port,
            data_path: std::env::var("DATA_PATH").ok().map(PathBuf::from),
            bank_path: std::env::var("COURSE_BANK_PATH").ok().map(PathBuf::from),
        }
    }
}

/// Seed courses accepted in TOML configuration.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct CourseBank {
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Attempt to load a `CourseBank` from the given path. On any parsing/IO
/// error, returns None; a broken bank must not stop the server.
pub fn load_course_bank(path: &PathBuf) -> Option<CourseBank> {
    match std::fs::read_to_string(path) {
        Ok(s) => match toml::from_str::<CourseBank>(&s) {
            Ok(bank) => {
                info!(target: "syllabus_backend", path = %path.display(), count = bank.courses.len(), "Loaded course bank (TOML)");
                Some(bank)
            }
            Err(e) => {
                error!(target: "syllabus_backend", path = %path.display(), error = %e, "Failed to parse TOML course bank");
                None
            }
        },
        Err(e) => {
            error!(target: "syllabus_backend", path = %path.display(), error = %e, "Failed to read TOML course bank file");
            None
        }
    }
}
