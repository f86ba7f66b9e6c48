//! Health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health report returned bare (no envelope) by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub environment: String,
    pub services: Services,
    /// Seconds since process start.
    pub uptime: u64,
    /// Resident set size in bytes, when the platform exposes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryReport>,
}

/// Per-service status. Everything is served from fixtures, so the
/// "database" is reported as mocked rather than probed.
#[derive(Debug, Serialize)]
pub struct Services {
    pub api: &'static str,
    pub database: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MemoryReport {
    pub rss_bytes: u64,
}

/// Liveness health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config().environment.clone(),
        services: Services {
            api: "ok",
            database: "mocked",
        },
        uptime: state.uptime_secs(),
        memory: resident_set_size().map(|rss_bytes| MemoryReport { rss_bytes }),
    })
}

/// Resident set size from `/proc/self/statm` (Linux only).
#[cfg(target_os = "linux")]
fn resident_set_size() -> Option<u64> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;
    Some(pages * 4096)
}

#[cfg(not(target_os = "linux"))]
fn resident_set_size() -> Option<u64> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_rss_is_reported_on_linux() {
        let rss = resident_set_size().expect("statm readable");
        assert!(rss > 0);
    }
}
