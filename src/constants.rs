/// Default MQTT port for unencrypted connections
pub const MQTT_DEFAULT_PORT: u16 = 1883;
/// MQTT port conventionally used for TLS
pub const MQTT_TLS_PORT: u16 = 8883;

/// Maximum SSID length in bytes (IEEE 802.11)
pub const WIFI_SSID_MAX_LEN: usize = 32;
/// Maximum WiFi password length in bytes (64 hex digits for a raw PSK)
pub const WIFI_PASSWORD_MAX_LEN: usize = 64;
/// Shortest passphrase accepted by WPA2-PSK
pub const WIFI_PASSWORD_WPA2_MIN_LEN: usize = 8;

/// Maximum length of a DNS hostname
pub const HOSTNAME_MAX_LEN: usize = 253;
/// Maximum length of a single DNS label
pub const HOSTNAME_LABEL_MAX_LEN: usize = 63;
/// Capacity for a rendered `host:port` string
pub const AUTHORITY_MAX_LEN: usize = HOSTNAME_MAX_LEN + 6;

/// Maximum length of an MQTT topic name (UTF-8 encoded string length prefix)
pub const MQTT_TOPIC_MAX_LEN: usize = 65535;
/// Client ID length every MQTT 3.1.1 broker must accept
pub const MQTT_CLIENT_ID_PORTABLE_MAX_LEN: usize = 23;
/// Hard limit for a client ID (UTF-8 encoded string length prefix)
pub const MQTT_CLIENT_ID_MAX_LEN: usize = 65535;

/// Template SSID, must be replaced before deployment
pub const PLACEHOLDER_WIFI_SSID: &str = "YOUR_WIFI_SSID";
/// Template WiFi password, must be replaced before deployment
pub const PLACEHOLDER_WIFI_PASSWORD: &str = "YOUR_WIFI_PASSWORD";
/// Template broker address, must be replaced before deployment
pub const PLACEHOLDER_MQTT_SERVER_IP: &str = "YOUR_MQTT_BROKER_IP";
/// Template topic, must be replaced before deployment
pub const PLACEHOLDER_MQTT_TOPIC: &str = "your/device/topic";

/// `cfg.toml` keys paired with the template value they must not keep
pub const PLACEHOLDERS: [(&str, &str); 4] = [
    ("wifi_ssid", PLACEHOLDER_WIFI_SSID),
    ("wifi_password", PLACEHOLDER_WIFI_PASSWORD),
    ("mqtt_server_ip", PLACEHOLDER_MQTT_SERVER_IP),
    ("mqtt_topic", PLACEHOLDER_MQTT_TOPIC),
];

/// Client ID shipped in the template, usable as is for a single device
pub const DEFAULT_MQTT_CLIENT_ID: &str = "M5Stack-Client-1";
