use serde::{Deserialize, Serialize};

/// Version shown when the firmware does not report one.
pub const FALLBACK_VERSION: &str = "1.0.0";

fn fallback_version() -> String {
    FALLBACK_VERSION.to_string()
}

/// `/api/version` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionInfo {
    #[serde(default = "fallback_version")]
    pub version: String,
}

/// Envelope every mutating DTU endpoint wraps its outcome in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Final-step summary: a headline plus ordered follow-up guidance lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionSummary {
    pub message: String,
    pub next_steps: Vec<String>,
}
