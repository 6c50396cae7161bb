//! Syllabus Backend · Course Authoring Store
//!
//! - Axum HTTP API over a keyed course document store
//! - Optional JSON snapshot durability and TOML course bank seeding
//! - Authoring client library: draft editing, session flow, list helpers
//! - Deterministic paginated syllabus layout for PDF export

pub mod client;
pub mod config;
pub mod domain;
pub mod draft;
pub mod error;
pub mod pdf;
pub mod protocol;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod util;
pub mod validate;

pub use domain::{BloomLevel, Course, CourseOutcome, Module, Unit};
pub use error::ApiError;
pub use store::AppState;
