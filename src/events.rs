use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the wizard, grouped by domain.
///
/// HTTP response variants are internal events produced by `then_send`
/// closures and are skipped from serialization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Setup(SetupEvent),
    Wifi(WifiEvent),
    Mqtt(MqttEvent),
    Cloud(CloudEvent),
    Ui(UiEvent),
}

/// Session bootstrap and step navigation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SetupEvent {
    /// Page load: fetch the firmware version and scan for networks.
    Initialize,
    /// Record the operating mode and enter the wifi step. Re-invocation is
    /// tolerated and simply restarts the flow from there.
    SelectMode { mode: Mode },
    GoToStep { step: Step },
    GoBack,

    #[serde(skip)]
    VersionResponse(Result<VersionInfo, String>),
}

/// WiFi scan and join.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WifiEvent {
    Scan,
    Connect { ssid: String, password: String },

    #[serde(skip)]
    ScanResponse(Result<Vec<WifiNetwork>, String>),
    #[serde(skip)]
    ConnectResponse(Result<(), String>),
}

/// Broker configuration (generic mode).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum MqttEvent {
    /// TLS checkbox toggled; rewrites the port to the default for the new
    /// setting.
    TlsToggled { enabled: bool },
    /// Form edit from the shell, as a JSON-encoded `MqttSettings`.
    FormUpdate { form_data: String },
    /// Submit the current form to the device.
    Configure,

    #[serde(skip)]
    ConfigureResponse(Result<(), String>),
}

/// MyPVLog.net sign-in, OAuth wait and device provisioning.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum CloudEvent {
    Login { email: String, password: String },
    GoogleSignIn,
    /// Sent by the shell on a fixed interval while the OAuth wait is active.
    OauthCheckTick,
    OauthCancel,
    OpenSignup,

    #[serde(skip)]
    LoginResponse(Result<String, String>),
    #[serde(skip)]
    GoogleSignInResponse(Result<String, String>),
    #[serde(skip)]
    OauthStatusResponse(Result<OauthStatus, String>),
    #[serde(skip)]
    ProvisionResponse(Result<ProvisionInfo, String>),
}

/// UI actions.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
}
