use crux_core::{render::render, Command};

use crate::api_post_ack;
use crate::events::{Event, MqttEvent};
use crate::model::Model;
use crate::types::{default_mqtt_port, CompletionSummary, MqttSettings, Step};
use crate::Effect;

use super::setup::go_to_step;

/// Handle broker configuration events (generic mode)
pub fn handle(event: MqttEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        MqttEvent::TlsToggled { enabled } => {
            model.mqtt_form.use_tls = enabled;
            // Rewrites any manual override; the operator can override again
            // afterwards via a form update.
            model.mqtt_form.port = default_mqtt_port(enabled);
            render()
        }

        MqttEvent::FormUpdate { form_data } => {
            match serde_json::from_str::<MqttSettings>(&form_data) {
                Ok(settings) => {
                    model.mqtt_form = settings;
                    render()
                }
                Err(e) => model.set_error_and_render(format!("Invalid MQTT form data: {e}")),
            }
        }

        MqttEvent::Configure => {
            let request = model.mqtt_form.clone();
            api_post_ack!(Mqtt, MqttEvent, model, "/api/mqtt/configure", ConfigureResponse, "MQTT configuration",
                loading: "Testing MQTT connection...",
                body_json: &request)
        }

        MqttEvent::ConfigureResponse(result) => match result {
            Ok(()) => {
                let settings = model.mqtt_form.clone();
                model.completion = Some(mqtt_completion(&settings));
                model.config.mqtt = Some(settings);
                model.hide_loading();
                go_to_step(Step::Complete, model)
            }
            Err(e) => model.set_error_and_render(e),
        },
    }
}

/// Completion summary for a configured generic broker.
fn mqtt_completion(settings: &MqttSettings) -> CompletionSummary {
    CompletionSummary {
        message: "Generic MQTT mode configured successfully!".to_string(),
        next_steps: vec![
            "Inverter data will be published to your MQTT broker".to_string(),
            format!(
                "Topic format: {}/{{dtu_id}}/{{inverter_serial}}",
                settings.topic
            ),
            "Device will reboot and start polling inverters".to_string(),
            "Configure inverters from the dashboard".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_toggle_sets_default_ports() {
        let mut model = Model::default();
        assert_eq!(model.mqtt_form.port, 1883);

        let _ = handle(MqttEvent::TlsToggled { enabled: true }, &mut model);
        assert!(model.mqtt_form.use_tls);
        assert_eq!(model.mqtt_form.port, 8883);

        let _ = handle(MqttEvent::TlsToggled { enabled: false }, &mut model);
        assert!(!model.mqtt_form.use_tls);
        assert_eq!(model.mqtt_form.port, 1883);
    }

    #[test]
    fn tls_toggle_is_idempotent() {
        let mut model = Model::default();

        let _ = handle(MqttEvent::TlsToggled { enabled: true }, &mut model);
        let _ = handle(MqttEvent::TlsToggled { enabled: true }, &mut model);

        assert_eq!(model.mqtt_form.port, 8883);
    }

    #[test]
    fn port_override_survives_until_next_toggle() {
        let mut model = Model::default();
        let _ = handle(MqttEvent::TlsToggled { enabled: true }, &mut model);

        let _ = handle(
            MqttEvent::FormUpdate {
                form_data: r#"{"host":"broker.local","port":9883,"ssl":true,
                    "username":"","password":"","topic":"home/pv"}"#
                    .to_string(),
            },
            &mut model,
        );
        assert_eq!(model.mqtt_form.port, 9883);

        // Toggling again rewrites the override with the new default.
        let _ = handle(MqttEvent::TlsToggled { enabled: false }, &mut model);
        assert_eq!(model.mqtt_form.port, 1883);
    }

    #[test]
    fn invalid_form_payload_surfaces_error() {
        let mut model = Model::default();

        let _ = handle(
            MqttEvent::FormUpdate {
                form_data: "not json".to_string(),
            },
            &mut model,
        );

        assert!(model.error_message.is_some());
    }

    #[test]
    fn configure_shows_loading_and_commits_nothing() {
        let mut model = Model::default();

        let _ = handle(MqttEvent::Configure, &mut model);

        assert_eq!(
            model.loading_message.as_deref(),
            Some("Testing MQTT connection...")
        );
        assert_eq!(model.config.mqtt, None);
    }

    #[test]
    fn configure_success_completes_with_topic_guidance() {
        let mut model = Model {
            current_step: Step::MqttGeneric,
            loading_message: Some("Testing MQTT connection...".to_string()),
            mqtt_form: MqttSettings {
                host: "broker.local".to_string(),
                topic: "home/pv".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let _ = handle(MqttEvent::ConfigureResponse(Ok(())), &mut model);

        assert_eq!(model.current_step, Step::Complete);
        assert_eq!(model.loading_message, None);
        assert_eq!(model.config.mqtt.as_ref().unwrap().topic, "home/pv");

        let summary = model.completion.unwrap();
        assert_eq!(summary.message, "Generic MQTT mode configured successfully!");
        assert!(summary
            .next_steps
            .iter()
            .any(|line| line.contains("home/pv/{dtu_id}/{inverter_serial}")));
    }

    #[test]
    fn configure_failure_stays_on_step_with_error() {
        let mut model = Model {
            current_step: Step::MqttGeneric,
            loading_message: Some("Testing MQTT connection...".to_string()),
            ..Default::default()
        };

        let _ = handle(
            MqttEvent::ConfigureResponse(Err(
                "MQTT configuration failed: connection refused".to_string(),
            )),
            &mut model,
        );

        assert_eq!(model.current_step, Step::MqttGeneric);
        assert_eq!(model.config.mqtt, None);
        assert_eq!(model.loading_message, None);
        assert!(model
            .error_message
            .as_deref()
            .unwrap()
            .contains("connection refused"));
    }
}
