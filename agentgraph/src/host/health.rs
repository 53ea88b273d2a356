//! Liveness report, independent of any run's outcome.

use serde::{Deserialize, Serialize};

/// Name reported in [`HealthReport::framework`].
pub const FRAMEWORK_NAME: &str = "agentgraph";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Process status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    /// RFC 3339 UTC time the report was taken.
    pub timestamp: String,
    pub framework: String,
    pub version: String,
}

impl HealthReport {
    /// Reports healthy as of now, with this crate's version.
    pub fn now() -> Self {
        Self {
            status: HealthStatus::Healthy,
            timestamp: chrono::Utc::now().to_rfc3339(),
            framework: FRAMEWORK_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
