use serde::{Deserialize, Serialize};

use crate::types::*;

/// Wizard session state - the complete Model.
/// Also serves as the ViewModel when serialized.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// The active wizard step. Exactly one step is active at any time.
    pub current_step: Step,
    /// Configuration committed so far; written only from success handlers.
    pub config: WizardConfig,

    // Startup data
    pub firmware_version: Option<String>,
    pub wifi_networks: Vec<WifiNetwork>,
    /// Scan failed; the shell offers manual SSID entry instead of the list.
    pub wifi_scan_failed: bool,

    // In-flight form data, committed to `config` on success
    pub pending_wifi: Option<WifiCredentials>,
    pub mqtt_form: MqttSettings,

    // OAuth wait state (cloud path)
    pub oauth_poll: OauthPollState,

    // UI state
    /// `Some` while the loading indicator is visible.
    pub loading_message: Option<String>,
    pub error_message: Option<String>,

    /// Final-step summary, set by the completion assembly.
    pub completion: Option<CompletionSummary>,
}

impl Model {
    /// Show the loading indicator with an operation-specific message and
    /// clear any previous error.
    pub fn show_loading(&mut self, message: impl Into<String>) {
        self.loading_message = Some(message.into());
        self.error_message = None;
    }

    /// Hide the loading indicator.
    pub fn hide_loading(&mut self) {
        self.loading_message = None;
    }

    /// Surface an error. The loading indicator is always hidden as part of
    /// error display; no partial-loading state may persist after an error.
    pub fn set_error(&mut self, error: String) {
        self.loading_message = None;
        self.error_message = Some(error);
    }

    /// `set_error` plus a render command - the common error exit of every
    /// response handler.
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear the error message without affecting the loading state.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
