use crux_core::{render::render, Command};

use crate::api_get;
use crate::api_post_ack;
use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::types::{NextStep, Step, WifiCredentials, WifiNetwork};
use crate::Effect;

use super::setup::go_to_step;

/// Where a successful WiFi join advances to, depending on the selected mode.
const AFTER_WIFI: NextStep = NextStep::ModeBranch {
    generic: Step::MqttGeneric,
    cloud_direct: Step::MypvlogLogin,
};

/// Handle WiFi scan and join events
pub fn handle(event: WifiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WifiEvent::Scan => {
            api_get!(Wifi, WifiEvent, "/api/wifi/scan", ScanResponse, "WiFi scan",
                expect_json: Vec<WifiNetwork>)
        }

        WifiEvent::ScanResponse(result) => match result {
            Ok(networks) => {
                model.wifi_networks = networks;
                model.wifi_scan_failed = false;
                render()
            }
            Err(e) => {
                // Scan failure falls back to manual SSID entry, no notice.
                log::debug!("WiFi scan failed: {e}");
                model.wifi_networks.clear();
                model.wifi_scan_failed = true;
                render()
            }
        },

        WifiEvent::Connect { ssid, password } => {
            let request = WifiCredentials { ssid, password };
            model.pending_wifi = Some(request.clone());
            api_post_ack!(Wifi, WifiEvent, model, "/api/wifi/connect", ConnectResponse, "WiFi connection",
                loading: "Connecting to WiFi...",
                body_json: &request)
        }

        WifiEvent::ConnectResponse(result) => match result {
            Ok(()) => {
                // Hide before branching so the next step starts without a
                // stale indicator.
                model.hide_loading();
                model.config.wifi = model.pending_wifi.take();
                go_to_step(AFTER_WIFI.resolve(model.config.mode), model)
            }
            Err(e) => {
                model.pending_wifi = None;
                model.set_error_and_render(e)
            }
        },
    }
}
