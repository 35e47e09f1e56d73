use serde::{Deserialize, Serialize};

/// Default broker port with TLS enabled.
pub const MQTT_PORT_TLS: u16 = 8883;
/// Default broker port without TLS.
pub const MQTT_PORT_PLAIN: u16 = 1883;

/// Default port for the given TLS setting.
pub fn default_mqtt_port(use_tls: bool) -> u16 {
    if use_tls {
        MQTT_PORT_TLS
    } else {
        MQTT_PORT_PLAIN
    }
}

/// Broker settings; also the `/api/mqtt/configure` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MqttSettings {
    pub host: String,
    pub port: u16,
    #[serde(rename = "ssl")]
    pub use_tls: bool,
    pub username: String,
    pub password: String,
    pub topic: String,
}

impl Default for MqttSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: MQTT_PORT_PLAIN,
            use_tls: false,
            username: String::new(),
            password: String::new(),
            topic: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_flag_uses_wire_name_ssl() {
        let settings = MqttSettings {
            host: "broker.local".to_string(),
            port: MQTT_PORT_TLS,
            use_tls: true,
            topic: "home/pv".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["ssl"], serde_json::json!(true));
        assert_eq!(json["port"], serde_json::json!(8883));
    }

    #[test]
    fn default_port_follows_tls_setting() {
        assert_eq!(default_mqtt_port(true), 8883);
        assert_eq!(default_mqtt_port(false), 1883);
    }
}
