use serde::{Deserialize, Serialize};

/// WiFi credentials; also the `/api/wifi/connect` request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
}

/// One network from the `/api/wifi/scan` result list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiNetwork {
    pub ssid: String,
    /// Signal strength in dBm, shown next to the SSID.
    pub rssi: i32,
}
