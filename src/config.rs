use core::fmt;

use log::{info, warn};

use crate::broker::{self, Broker};
use crate::client_id::{self, ClientId};
use crate::constants::*;
use crate::credentials::{self, WifiCredentials};
use crate::topic::{self, TopicName};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi password (secret, never logged)
    pub wifi_password: &'static str,

    // MQTT broker IPv4 address or hostname
    pub mqtt_server_ip: &'static str,

    // MQTT port (usually 1883 or 8883 for TLS)
    pub mqtt_port: u16,

    // MQTT topic to subscribe to
    pub mqtt_topic: &'static str,

    // MQTT client ID, unique per device on the broker
    pub mqtt_client_id: &'static str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

pub const WIFI_SSID: &str = CONFIG.wifi_ssid;
pub const WIFI_PASSWORD: &str = CONFIG.wifi_password;
pub const MQTT_SERVER_IP: &str = CONFIG.mqtt_server_ip;
pub const MQTT_PORT: u16 = CONFIG.mqtt_port;
pub const MQTT_TOPIC: &str = CONFIG.mqtt_topic;
pub const MQTT_CLIENT_ID: &str = CONFIG.mqtt_client_id;

/// Values of the unedited `cfg.toml.example`
pub const TEMPLATE: Config = Config {
    wifi_ssid: PLACEHOLDER_WIFI_SSID,
    wifi_password: PLACEHOLDER_WIFI_PASSWORD,
    mqtt_server_ip: PLACEHOLDER_MQTT_SERVER_IP,
    mqtt_port: MQTT_DEFAULT_PORT,
    mqtt_topic: PLACEHOLDER_MQTT_TOPIC,
    mqtt_client_id: DEFAULT_MQTT_CLIENT_ID,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WifiSsid,
    WifiPassword,
    MqttServerIp,
    MqttPort,
    MqttTopic,
    MqttClientId,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::WifiSsid,
        Field::WifiPassword,
        Field::MqttServerIp,
        Field::MqttPort,
        Field::MqttTopic,
        Field::MqttClientId,
    ];

    /// Constant name, as exported by this crate
    pub fn name(&self) -> &'static str {
        match self {
            Field::WifiSsid => "WIFI_SSID",
            Field::WifiPassword => "WIFI_PASSWORD",
            Field::MqttServerIp => "MQTT_SERVER_IP",
            Field::MqttPort => "MQTT_PORT",
            Field::MqttTopic => "MQTT_TOPIC",
            Field::MqttClientId => "MQTT_CLIENT_ID",
        }
    }

    /// Key in `cfg.toml`
    pub fn key(&self) -> &'static str {
        match self {
            Field::WifiSsid => "wifi_ssid",
            Field::WifiPassword => "wifi_password",
            Field::MqttServerIp => "mqtt_server_ip",
            Field::MqttPort => "mqtt_port",
            Field::MqttTopic => "mqtt_topic",
            Field::MqttClientId => "mqtt_client_id",
        }
    }

    /// Template value that has to be replaced, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        let key = self.key();
        PLACEHOLDERS
            .iter()
            .find(|(placeholder_key, _)| *placeholder_key == key)
            .map(|(_, value)| *value)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Field::WifiPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Text(&'a str),
    Port(u16),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Placeholder(Field),
    InteriorNul(Field),
    Wifi(credentials::Error),
    Broker(broker::Error),
    Topic(topic::Error),
    ClientId(client_id::Error),
}

impl Error {
    /// Field the error is about
    pub fn field(&self) -> Field {
        match self {
            Error::Placeholder(field) | Error::InteriorNul(field) => *field,
            Error::Wifi(
                credentials::Error::SsidEmpty
                | credentials::Error::SsidTooLong(_)
                | credentials::Error::SsidNullCharacter
                | credentials::Error::SsidCStr(_),
            ) => Field::WifiSsid,
            Error::Wifi(
                credentials::Error::PasswordEmpty
                | credentials::Error::PasswordTooLong(_)
                | credentials::Error::PasswordNullCharacter
                | credentials::Error::PasswordCStr(_),
            ) => Field::WifiPassword,
            Error::Broker(broker::Error::InvalidPort) => Field::MqttPort,
            Error::Broker(_) => Field::MqttServerIp,
            Error::Topic(_) => Field::MqttTopic,
            Error::ClientId(_) => Field::MqttClientId,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Placeholder(field) => write!(
                f,
                "{field} still has its template value, edit `{}` in cfg.toml",
                field.key()
            ),
            Error::InteriorNul(field) => write!(f, "{field} contains a NUL character"),
            Error::Wifi(e) => write!(f, "{}: {e}", self.field()),
            Error::Broker(e) => write!(f, "{}: {e}", self.field()),
            Error::Topic(e) => write!(f, "{}: {e}", self.field()),
            Error::ClientId(e) => write!(f, "{}: {e}", self.field()),
        }
    }
}

/// Typed view over a validated [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings<'a> {
    pub wifi: WifiCredentials<'a>,
    pub broker: Broker<'a>,
    pub topic: TopicName<'a>,
    pub client_id: ClientId<'a>,
}

impl Config {
    pub fn get(&self, field: Field) -> Value<'static> {
        match field {
            Field::WifiSsid => Value::Text(self.wifi_ssid),
            Field::WifiPassword => Value::Text(self.wifi_password),
            Field::MqttServerIp => Value::Text(self.mqtt_server_ip),
            Field::MqttPort => Value::Port(self.mqtt_port),
            Field::MqttTopic => Value::Text(self.mqtt_topic),
            Field::MqttClientId => Value::Text(self.mqtt_client_id),
        }
    }

    /// Every value with its field, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (Field, Value<'static>)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Fields still holding their template value
    pub fn placeholders(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields().filter_map(|(field, value)| match (field.placeholder(), value) {
            (Some(placeholder), Value::Text(text)) if text == placeholder => Some(field),
            _ => None,
        })
    }

    /// Checks every value and returns typed views over them.
    ///
    /// Template values are refused before any syntax check, so an unedited
    /// configuration always reports the first field left to edit.
    pub fn validate(&self) -> Result<Settings<'static>, Error> {
        if let Some(field) = self.placeholders().next() {
            return Err(Error::Placeholder(field));
        }

        for (field, value) in self.fields() {
            if let Value::Text(text) = value {
                if text.contains('\0') {
                    return Err(Error::InteriorNul(field));
                }
            }
        }

        let wifi = WifiCredentials::new(self.wifi_ssid, self.wifi_password).map_err(Error::Wifi)?;
        let broker = Broker::new(self.mqtt_server_ip, self.mqtt_port).map_err(Error::Broker)?;
        let topic = TopicName::new(self.mqtt_topic).map_err(Error::Topic)?;
        let client_id = ClientId::new(self.mqtt_client_id).map_err(Error::ClientId)?;

        if topic.is_system() {
            warn!("MQTT topic {} is reserved for the broker", topic);
        }

        info!(
            "Configuration valid: WiFi {:?}, broker {}{}, topic {}, client ID {}",
            wifi.ssid(),
            broker,
            if broker.is_tls_port() { " (TLS)" } else { "" },
            topic,
            client_id
        );

        Ok(Settings {
            wifi,
            broker,
            topic,
            client_id,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &"********")
            .field("mqtt_server_ip", &self.mqtt_server_ip)
            .field("mqtt_port", &self.mqtt_port)
            .field("mqtt_topic", &self.mqtt_topic)
            .field("mqtt_client_id", &self.mqtt_client_id)
            .finish()
    }
}
