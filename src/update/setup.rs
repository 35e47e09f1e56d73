use crux_core::{render::render, Command};

use crate::api_get;
use crate::commands::browser;
use crate::events::{Event, SetupEvent};
use crate::model::Model;
use crate::types::{Step, VersionInfo, WifiNetwork};
use crate::Effect;

/// Handle session bootstrap and step navigation events
pub fn handle(event: SetupEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Page load: fetch the firmware version and populate the SSID list
        SetupEvent::Initialize => Command::all([
            render(),
            api_get!(Setup, SetupEvent, "/api/version", VersionResponse, "Version",
                expect_json: VersionInfo),
            api_get!(Wifi, WifiEvent, "/api/wifi/scan", ScanResponse, "WiFi scan",
                expect_json: Vec<WifiNetwork>),
        ]),

        SetupEvent::VersionResponse(result) => match result {
            Ok(info) => {
                model.firmware_version = Some(info.version);
                render()
            }
            Err(e) => {
                // Version display is cosmetic and never blocks the wizard.
                log::debug!("version load failed: {e}");
                Command::done()
            }
        },

        SetupEvent::SelectMode { mode } => {
            model.config.mode = Some(mode);
            go_to_step(Step::Wifi, model)
        }

        SetupEvent::GoToStep { step } => go_to_step(step, model),

        SetupEvent::GoBack => match model.current_step.predecessor() {
            Some(step) => go_to_step(step, model),
            None => Command::done(),
        },
    }
}

/// Activate `step` and scroll the viewport back to the top.
pub fn go_to_step(step: Step, model: &mut Model) -> Command<Effect, Event> {
    model.current_step = step;
    Command::all([render(), browser::scroll_to_top()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    #[test]
    fn select_mode_records_mode_and_enters_wifi_step() {
        let mut model = Model::default();

        let _ = handle(
            SetupEvent::SelectMode {
                mode: Mode::Generic,
            },
            &mut model,
        );

        assert_eq!(model.config.mode, Some(Mode::Generic));
        assert_eq!(model.current_step, Step::Wifi);
    }

    #[test]
    fn reselecting_mode_overwrites_and_restarts_from_wifi() {
        let mut model = Model {
            current_step: Step::MqttGeneric,
            ..Default::default()
        };
        model.config.mode = Some(Mode::Generic);

        let _ = handle(
            SetupEvent::SelectMode {
                mode: Mode::Mypvlog,
            },
            &mut model,
        );

        assert_eq!(model.config.mode, Some(Mode::Mypvlog));
        assert_eq!(model.current_step, Step::Wifi);
    }

    #[test]
    fn go_back_follows_predecessor_table() {
        for (from, to) in [
            (Step::Wifi, Step::Mode),
            (Step::MqttGeneric, Step::Wifi),
            (Step::MypvlogLogin, Step::Wifi),
        ] {
            let mut model = Model {
                current_step: from,
                ..Default::default()
            };
            let _ = handle(SetupEvent::GoBack, &mut model);
            assert_eq!(model.current_step, to);
        }
    }

    #[test]
    fn go_back_is_a_noop_without_predecessor() {
        for step in [Step::Mode, Step::Complete] {
            let mut model = Model {
                current_step: step,
                ..Default::default()
            };
            let _ = handle(SetupEvent::GoBack, &mut model);
            assert_eq!(model.current_step, step);
        }
    }

    #[test]
    fn exactly_one_step_active_across_transitions() {
        let mut model = Model::default();

        for step in [
            Step::Wifi,
            Step::MypvlogLogin,
            Step::Wifi,
            Step::MqttGeneric,
            Step::Complete,
        ] {
            let _ = handle(SetupEvent::GoToStep { step }, &mut model);
            // `current_step` is the single source of step activation.
            assert_eq!(model.current_step, step);
        }
    }

    #[test]
    fn version_response_stores_version() {
        let mut model = Model::default();

        let _ = handle(
            SetupEvent::VersionResponse(Ok(VersionInfo {
                version: "2.3.1".to_string(),
            })),
            &mut model,
        );

        assert_eq!(model.firmware_version, Some("2.3.1".to_string()));
    }

    #[test]
    fn version_failure_is_swallowed() {
        let mut model = Model::default();

        let _ = handle(
            SetupEvent::VersionResponse(Err("Version error: timeout".to_string())),
            &mut model,
        );

        assert_eq!(model.firmware_version, None);
        assert_eq!(model.error_message, None);
    }
}
