// Parsed `cfg.toml`, shared with build.rs through `#[path]`.

use serde::Deserialize;

use crate::constants::PLACEHOLDERS;

/// File the user edits, never checked in
pub const CONFIG_FILE: &str = "cfg.toml";
/// Template shipped with the crate
pub const TEMPLATE_FILE: &str = "cfg.toml.example";

/// Picks the file to compile in and whether it is the template.
///
/// The template is only used when `cfg.toml` is missing and the
/// `template-config` feature is enabled.
pub fn select_source(
    config_exists: bool,
    allow_template: bool,
) -> Result<(&'static str, bool), String> {
    if config_exists {
        Ok((CONFIG_FILE, false))
    } else if allow_template {
        Ok((TEMPLATE_FILE, true))
    } else {
        Err(format!(
            "{CONFIG_FILE} not found: copy {TEMPLATE_FILE} to {CONFIG_FILE} and set your own values"
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub mqtt_server_ip: String,
    pub mqtt_port: u16,
    pub mqtt_topic: String,
    pub mqtt_client_id: String,
}

impl RawConfig {
    pub fn parse(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| e.to_string())
    }

    fn text_values(&self) -> [(&'static str, &str); 5] {
        [
            ("wifi_ssid", &self.wifi_ssid),
            ("wifi_password", &self.wifi_password),
            ("mqtt_server_ip", &self.mqtt_server_ip),
            ("mqtt_topic", &self.mqtt_topic),
            ("mqtt_client_id", &self.mqtt_client_id),
        ]
    }

    // Every text value must be set and the port must be a usable TCP port.
    pub fn check_shape(&self) -> Result<(), String> {
        for (key, value) in self.text_values() {
            if value.is_empty() {
                return Err(format!("`{key}` must not be empty"));
            }
        }

        if self.mqtt_port == 0 {
            return Err("`mqtt_port` must be between 1 and 65535".into());
        }

        Ok(())
    }

    /// Keys still holding their template value
    pub fn placeholders(&self) -> Vec<&'static str> {
        let values = self.text_values();
        PLACEHOLDERS
            .iter()
            .filter(|(key, placeholder)| {
                values
                    .iter()
                    .any(|(value_key, value)| value_key == key && value == placeholder)
            })
            .map(|(key, _)| *key)
            .collect()
    }

    /// Rust source for the generated `config.rs`
    pub fn to_rust(&self, source: &str, is_template: bool) -> String {
        format!(
            r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_password: {psk:?},
            mqtt_server_ip: {server:?},
            mqtt_port: {port},
            mqtt_topic: {topic:?},
            mqtt_client_id: {client_id:?},
        }};

        /// File the configuration was read from
        pub const CONFIG_SOURCE: &str = {source:?};

        /// Whether the values come from the unedited template
        pub const CONFIG_IS_TEMPLATE: bool = {is_template};
    "#,
            ssid = self.wifi_ssid,
            psk = self.wifi_password,
            server = self.mqtt_server_ip,
            port = self.mqtt_port,
            topic = self.mqtt_topic,
            client_id = self.mqtt_client_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EDITED: &str = r#"
        wifi_ssid = "HomeNet"
        wifi_password = "hunter2hunter2"
        mqtt_server_ip = "192.168.1.20"
        mqtt_port = 1883
        mqtt_topic = "home/m5stack/display"
        mqtt_client_id = "M5Stack-Client-1"
    "#;

    fn edited_with(key: &str, line: &str) -> String {
        EDITED
            .lines()
            .map(|l| {
                if l.trim_start().starts_with(&format!("{key} ")) {
                    line
                } else {
                    l
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn missing_config_without_opt_in_is_an_error() {
        let err = select_source(false, false).unwrap_err();
        assert_eq!(
            err,
            "cfg.toml not found: copy cfg.toml.example to cfg.toml and set your own values"
        );
    }

    #[test]
    fn template_only_with_opt_in() {
        assert_eq!(select_source(false, true), Ok((TEMPLATE_FILE, true)));
        assert_eq!(select_source(true, true), Ok((CONFIG_FILE, false)));
        assert_eq!(select_source(true, false), Ok((CONFIG_FILE, false)));
    }

    #[test]
    fn accepts_edited_file() {
        let raw = RawConfig::parse(EDITED).unwrap();
        assert_eq!(raw.check_shape(), Ok(()));
        assert!(raw.placeholders().is_empty());
        assert_eq!(raw.mqtt_port, 1883);
    }

    #[test]
    fn rejects_empty_field() {
        let raw = RawConfig::parse(&edited_with("wifi_ssid", r#"wifi_ssid = """#)).unwrap();
        assert_eq!(
            raw.check_shape(),
            Err("`wifi_ssid` must not be empty".to_string())
        );
    }

    #[test]
    fn rejects_port_zero() {
        let raw = RawConfig::parse(&edited_with("mqtt_port", "mqtt_port = 0")).unwrap();
        assert_eq!(
            raw.check_shape(),
            Err("`mqtt_port` must be between 1 and 65535".to_string())
        );
    }

    #[test]
    fn rejects_port_overflow_at_parse() {
        assert!(RawConfig::parse(&edited_with("mqtt_port", "mqtt_port = 70000")).is_err());
    }

    #[test]
    fn rejects_unknown_key() {
        let toml_str = format!("{EDITED}\nmqtt_username = \"m5\"\n");
        let err = RawConfig::parse(&toml_str).unwrap_err();
        assert!(err.contains("mqtt_username"), "{err}");
    }

    #[test]
    fn rejects_missing_key() {
        let toml_str = edited_with("mqtt_topic", "");
        assert!(RawConfig::parse(&toml_str).is_err());
    }

    #[test]
    fn reports_leftover_placeholder() {
        let raw = RawConfig::parse(&edited_with(
            "mqtt_server_ip",
            r#"mqtt_server_ip = "YOUR_MQTT_BROKER_IP""#,
        ))
        .unwrap();
        assert_eq!(raw.placeholders(), ["mqtt_server_ip"]);
        assert_eq!(raw.check_shape(), Ok(()));
    }

    #[test]
    fn template_file_is_all_placeholders() {
        let raw = RawConfig::parse(include_str!("../cfg.toml.example")).unwrap();
        assert_eq!(
            raw.placeholders(),
            ["wifi_ssid", "wifi_password", "mqtt_server_ip", "mqtt_topic"]
        );
    }

    #[test]
    fn generated_source_escapes_values() {
        let raw = RawConfig::parse(&edited_with(
            "wifi_ssid",
            r#"wifi_ssid = "Home \"Net\"""#,
        ))
        .unwrap();
        let code = raw.to_rust("cfg.toml", false);
        assert!(code.contains(r#"wifi_ssid: "Home \"Net\"","#), "{code}");
        assert!(code.contains("mqtt_port: 1883,"));
        assert!(code.contains(r#"CONFIG_SOURCE: &str = "cfg.toml";"#));
        assert!(code.contains("CONFIG_IS_TEMPLATE: bool = false;"));
    }
}
