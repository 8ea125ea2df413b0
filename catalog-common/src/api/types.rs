//! Response bodies shared by the catalog services

use serde::{Deserialize, Serialize};

/// Plain-text greeting served at `/`
pub const GREETING: &str = "WELCOME YOU ARE IN KISHA MANGUBAT API!!!";

/// Health check response: status, module name and version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok(module: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            module: module.to_string(),
            version: version.to_string(),
        }
    }
}

/// Error body returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
