use core::fmt;

use crate::constants::MQTT_TOPIC_MAX_LEN;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Empty,
    TooLong(usize),
    Wildcard(char),
    NullCharacter,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "topic is empty"),
            Error::TooLong(len) => {
                write!(f, "topic is {len} bytes, limit is {MQTT_TOPIC_MAX_LEN}")
            }
            Error::Wildcard(c) => write!(f, "topic contains wildcard '{c}'"),
            Error::NullCharacter => write!(f, "topic contains a NUL character"),
        }
    }
}

/// A concrete MQTT topic name, as opposed to a subscription filter.
///
/// Levels are separated by `/`. Empty levels (`a//b`, leading or trailing
/// `/`) are legal and distinct from their collapsed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicName<'a>(&'a str);

impl<'a> TopicName<'a> {
    pub fn new(topic: &'a str) -> Result<Self, Error> {
        if topic.is_empty() {
            return Err(Error::Empty);
        }
        if topic.len() > MQTT_TOPIC_MAX_LEN {
            return Err(Error::TooLong(topic.len()));
        }
        if let Some(c) = topic.chars().find(|c| matches!(c, '+' | '#')) {
            return Err(Error::Wildcard(c));
        }
        if topic.contains('\0') {
            return Err(Error::NullCharacter);
        }

        Ok(Self(topic))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn levels(&self) -> core::str::Split<'a, char> {
        self.0.split('/')
    }

    /// Topics starting with `$` are reserved for broker use (e.g. `$SYS/...`)
    pub fn is_system(&self) -> bool {
        self.0.starts_with('$')
    }
}

impl fmt::Display for TopicName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
