use serde::{Deserialize, Serialize};

use super::{MqttSettings, WifiCredentials};

/// Operating mode chosen on the first wizard step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Publish inverter data to an operator-supplied MQTT broker.
    Generic,
    /// Register the DTU under a MyPVLog.net account.
    Mypvlog,
}

/// Wizard steps. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    Mode,
    Wifi,
    MqttGeneric,
    MypvlogLogin,
    Complete,
}

impl Step {
    /// Static predecessor table for back navigation. `Mode` and `Complete`
    /// have no predecessor.
    pub fn predecessor(self) -> Option<Step> {
        match self {
            Step::Wifi => Some(Step::Mode),
            Step::MqttGeneric | Step::MypvlogLogin => Some(Step::Wifi),
            Step::Mode | Step::Complete => None,
        }
    }
}

/// Where a step advances to, possibly depending on the selected mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Plain(Step),
    ModeBranch { generic: Step, cloud_direct: Step },
}

impl NextStep {
    /// Resolve against the selected mode, once, at the point of advancing.
    /// Without a selected mode the cloud arm wins, mirroring the firmware
    /// UI's `else` fall-through.
    pub fn resolve(self, mode: Option<Mode>) -> Step {
        match self {
            NextStep::Plain(step) => step,
            NextStep::ModeBranch {
                generic,
                cloud_direct,
            } => match mode {
                Some(Mode::Generic) => generic,
                _ => cloud_direct,
            },
        }
    }
}

/// The configuration accumulated across wizard steps. Each field is written
/// only after its step's network call succeeds, never speculatively.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WizardConfig {
    pub mode: Option<Mode>,
    pub wifi: Option<WifiCredentials>,
    pub mqtt: Option<MqttSettings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predecessor_table() {
        assert_eq!(Step::Wifi.predecessor(), Some(Step::Mode));
        assert_eq!(Step::MqttGeneric.predecessor(), Some(Step::Wifi));
        assert_eq!(Step::MypvlogLogin.predecessor(), Some(Step::Wifi));
        assert_eq!(Step::Mode.predecessor(), None);
        assert_eq!(Step::Complete.predecessor(), None);
    }

    #[test]
    fn mode_branch_resolution() {
        let branch = NextStep::ModeBranch {
            generic: Step::MqttGeneric,
            cloud_direct: Step::MypvlogLogin,
        };

        assert_eq!(branch.resolve(Some(Mode::Generic)), Step::MqttGeneric);
        assert_eq!(branch.resolve(Some(Mode::Mypvlog)), Step::MypvlogLogin);
        // No mode selected falls through to the cloud arm.
        assert_eq!(branch.resolve(None), Step::MypvlogLogin);
    }

    #[test]
    fn plain_ignores_mode() {
        assert_eq!(
            NextStep::Plain(Step::Complete).resolve(Some(Mode::Generic)),
            Step::Complete
        );
    }

    #[test]
    fn step_wire_names() {
        assert_eq!(
            serde_json::to_string(&Step::MqttGeneric).unwrap(),
            "\"mqtt-generic\""
        );
        assert_eq!(
            serde_json::to_string(&Step::MypvlogLogin).unwrap(),
            "\"mypvlog-login\""
        );
        assert_eq!(
            serde_json::to_string(&Mode::Mypvlog).unwrap(),
            "\"mypvlog\""
        );
    }
}
