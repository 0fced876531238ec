use core::fmt;
use core::str::FromStr;

use heapless::String;
use log::warn;

use crate::constants::{MQTT_CLIENT_ID_MAX_LEN, MQTT_CLIENT_ID_PORTABLE_MAX_LEN};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Empty,
    TooLong(usize),
    NullCharacter,
    BufferTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "client ID is empty"),
            Error::TooLong(len) => {
                write!(f, "client ID is {len} bytes, limit is {MQTT_CLIENT_ID_MAX_LEN}")
            }
            Error::NullCharacter => write!(f, "client ID contains a NUL character"),
            Error::BufferTooSmall => write!(f, "client ID does not fit the buffer"),
        }
    }
}

/// Identity presented to the broker in CONNECT.
///
/// Brokers disconnect an existing session when a second connection uses the
/// same ID, so every device needs its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientId<'a>(&'a str);

impl<'a> ClientId<'a> {
    pub fn new(id: &'a str) -> Result<Self, Error> {
        if id.is_empty() {
            return Err(Error::Empty);
        }
        if id.len() > MQTT_CLIENT_ID_MAX_LEN {
            return Err(Error::TooLong(id.len()));
        }
        if id.contains('\0') {
            return Err(Error::NullCharacter);
        }

        let client_id = Self(id);
        if !client_id.is_portable() {
            warn!(
                "MQTT client ID {:?} may be refused: brokers are only required to accept \
                 up to {} alphanumeric characters",
                id, MQTT_CLIENT_ID_PORTABLE_MAX_LEN
            );
        }

        Ok(client_id)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Whether every MQTT 3.1.1 broker is required to accept this ID.
    /// `-` and `_` are tolerated since practically all brokers allow them.
    pub fn is_portable(&self) -> bool {
        self.0.len() <= MQTT_CLIENT_ID_PORTABLE_MAX_LEN
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    pub fn to_heapless<const N: usize>(&self) -> Result<String<N>, Error> {
        String::<N>::from_str(self.0).map_err(|_| Error::BufferTooSmall)
    }
}

impl fmt::Display for ClientId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
