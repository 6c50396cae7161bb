//! Syllabus Backend · Course Store API
//!
//! - Axum HTTP API under /api/courses
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT              : u16 (default 5000)
//!   DATA_PATH         : JSON snapshot file for durability (optional)
//!   COURSE_BANK_PATH  : path to TOML config with seed courses (optional)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::{info, instrument};

use syllabus_backend::config::Settings;
use syllabus_backend::routes::build_router;
use syllabus_backend::store::AppState;
use syllabus_backend::telemetry;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let settings = Settings::from_env();

    // Build shared application state (course store, snapshot, seed bank).
    let state = Arc::new(AppState::new(&settings));

    // Build the HTTP router with routes, CORS and tracing layers.
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr).await?;
    info!(target: "syllabus_backend", %addr, "HTTP server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
