//! WiFi and MQTT settings for the M5Stack subscriber.
//!
//! Values are read from `cfg.toml` at build time (copy `cfg.toml.example`
//! and edit it) and exposed as the [`CONFIG`] constant and as individually
//! named constants. Call [`Config::validate`] once at startup to get typed,
//! checked views before joining the network.
#![cfg_attr(not(test), no_std)]

pub mod broker;
#[cfg(test)]
mod cfg_file;
pub mod client_id;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod cstr;
pub mod topic;

pub use broker::{Broker, Host};
pub use client_id::ClientId;
pub use config::{
    Config, Field, Settings, Value, CONFIG, CONFIG_IS_TEMPLATE, CONFIG_SOURCE, MQTT_CLIENT_ID,
    MQTT_PORT, MQTT_SERVER_IP, MQTT_TOPIC, WIFI_PASSWORD, WIFI_SSID,
};
pub use credentials::WifiCredentials;
pub use topic::TopicName;
