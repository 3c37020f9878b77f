//! Health check handler

use serde::Serialize;

use crate::{ok, ApiResult};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health - Liveness probe
pub async fn health() -> ApiResult<HealthStatus> {
    ok(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
