use core::fmt::{self, Write};
use core::net::Ipv4Addr;
use core::str::FromStr;

use heapless::String;

use crate::constants::{AUTHORITY_MAX_LEN, HOSTNAME_LABEL_MAX_LEN, HOSTNAME_MAX_LEN, MQTT_TLS_PORT};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyHost,
    HostTooLong(usize),
    InvalidIpv4,
    InvalidHostname,
    InvalidPort,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyHost => write!(f, "broker address is empty"),
            Error::HostTooLong(len) => {
                write!(f, "broker hostname is {len} bytes, limit is {HOSTNAME_MAX_LEN}")
            }
            Error::InvalidIpv4 => write!(f, "broker address is not a valid IPv4 address"),
            Error::InvalidHostname => write!(f, "broker address is not a valid hostname"),
            Error::InvalidPort => write!(f, "broker port must be between 1 and 65535"),
        }
    }
}

/// Broker address: a literal IPv4 address or a name left for DNS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host<'a> {
    Ipv4(Ipv4Addr),
    Name(&'a str),
}

impl<'a> Host<'a> {
    pub fn parse(host: &'a str) -> Result<Self, Error> {
        if host.is_empty() {
            return Err(Error::EmptyHost);
        }

        if let Ok(addr) = Ipv4Addr::from_str(host) {
            return Ok(Host::Ipv4(addr));
        }

        if host.len() > HOSTNAME_MAX_LEN {
            return Err(Error::HostTooLong(host.len()));
        }

        // Digits and dots only, but not a dotted quad: a mistyped address
        if host.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return Err(Error::InvalidIpv4);
        }

        if !host.split('.').all(is_valid_label) {
            return Err(Error::InvalidHostname);
        }

        Ok(Host::Name(host))
    }

    /// Whether a DNS query is required before connecting
    pub fn needs_resolution(&self) -> bool {
        matches!(self, Host::Name(_))
    }
}

// RFC 1123 label: letters, digits and hyphens, no leading or trailing hyphen
fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= HOSTNAME_LABEL_MAX_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl fmt::Display for Host<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Ipv4(addr) => write!(f, "{addr}"),
            Host::Name(name) => f.write_str(name),
        }
    }
}

/// MQTT broker endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broker<'a> {
    pub host: Host<'a>,
    pub port: u16,
}

impl<'a> Broker<'a> {
    pub fn new(host: &'a str, port: u16) -> Result<Self, Error> {
        if port == 0 {
            return Err(Error::InvalidPort);
        }

        Ok(Self {
            host: Host::parse(host)?,
            port,
        })
    }

    /// Whether the port is the one conventionally used for MQTT over TLS
    pub fn is_tls_port(&self) -> bool {
        self.port == MQTT_TLS_PORT
    }

    /// `host:port` as a fixed-capacity string
    pub fn authority(&self) -> String<AUTHORITY_MAX_LEN> {
        let mut s = String::new();
        // capacity covers the longest hostname plus ":65535"
        let _ = write!(s, "{}:{}", self.host, self.port);
        s
    }
}

impl fmt::Display for Broker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
