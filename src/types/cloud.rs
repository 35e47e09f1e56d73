use serde::{Deserialize, Serialize};

/// Interval between OAuth status checks.
pub const OAUTH_POLL_INTERVAL_MS: u64 = 2_000;
/// Hard deadline after which the OAuth wait is abandoned.
pub const OAUTH_POLL_TIMEOUT_MS: u64 = 300_000;

/// State of the out-of-band OAuth wait. Exists only while polling; reset to
/// `Idle` on success, cancellation or timeout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum OauthPollState {
    #[default]
    Idle,
    Waiting {
        elapsed_ms: u64,
    },
}

/// `/api/mypvlog/login` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `/api/mypvlog/login` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LoginResult {
    /// Collapse the envelope into the credential token or a user-facing
    /// failure message.
    pub fn into_token(self) -> Result<String, String> {
        if self.success {
            self.token
                .ok_or_else(|| "Login failed: no token in response".to_string())
        } else {
            Err(format!(
                "Login failed: {}",
                self.error.unwrap_or_else(|| "unknown error".to_string())
            ))
        }
    }
}

/// `/api/mypvlog/oauth/google` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OauthStart {
    #[serde(default)]
    pub url: Option<String>,
}

impl OauthStart {
    /// The popup URL, or the initiation failure message.
    pub fn into_url(self) -> Result<String, String> {
        self.url.ok_or_else(|| "OAuth initiation failed".to_string())
    }
}

/// `/api/mypvlog/oauth/status` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OauthStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub token: Option<String>,
}

/// `/api/mypvlog/provision` request body. The token is consumed exactly once
/// and never stored in the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub token: String,
}

/// `/api/mypvlog/provision` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvisionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub dtu_id: Option<String>,
    #[serde(default)]
    pub inverter_count: u32,
    #[serde(default)]
    pub error: Option<String>,
}

/// Successful provisioning outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvisionInfo {
    pub dtu_id: String,
    pub inverter_count: u32,
}

impl ProvisionResult {
    /// Collapse the envelope into the provisioning outcome or a user-facing
    /// failure message.
    pub fn into_info(self) -> Result<ProvisionInfo, String> {
        if self.success {
            Ok(ProvisionInfo {
                dtu_id: self.dtu_id.unwrap_or_default(),
                inverter_count: self.inverter_count,
            })
        } else {
            Err(format!(
                "Device provisioning failed: {}",
                self.error.unwrap_or_else(|| "unknown error".to_string())
            ))
        }
    }
}
