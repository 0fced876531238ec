use core::ffi::CStr;
use core::fmt;
use core::str::FromStr;

use heapless::String;
use log::warn;

use crate::constants::{WIFI_PASSWORD_MAX_LEN, WIFI_PASSWORD_WPA2_MIN_LEN, WIFI_SSID_MAX_LEN};
use crate::cstr;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    SsidEmpty,
    SsidTooLong(usize),
    PasswordEmpty,
    PasswordTooLong(usize),
    SsidNullCharacter,
    PasswordNullCharacter,
    SsidCStr(cstr::Error),
    PasswordCStr(cstr::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SsidEmpty => write!(f, "SSID is empty"),
            Error::SsidTooLong(len) => {
                write!(f, "SSID is {len} bytes, limit is {WIFI_SSID_MAX_LEN}")
            }
            Error::PasswordEmpty => write!(f, "password is empty"),
            Error::PasswordTooLong(len) => {
                write!(f, "password is {len} bytes, limit is {WIFI_PASSWORD_MAX_LEN}")
            }
            Error::SsidNullCharacter => write!(f, "SSID contains a NUL character"),
            Error::PasswordNullCharacter => write!(f, "password contains a NUL character"),
            Error::SsidCStr(e) => write!(f, "SSID C string conversion failed: {e:?}"),
            Error::PasswordCStr(e) => {
                write!(f, "password C string conversion failed: {e:?}")
            }
        }
    }
}

/// SSID and passphrase of the access point to join.
///
/// `Debug` never prints the password.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials<'a> {
    ssid: &'a str,
    password: &'a str,
}

impl<'a> WifiCredentials<'a> {
    pub fn new(ssid: &'a str, password: &'a str) -> Result<Self, Error> {
        if ssid.is_empty() {
            return Err(Error::SsidEmpty);
        }
        if ssid.len() > WIFI_SSID_MAX_LEN {
            return Err(Error::SsidTooLong(ssid.len()));
        }
        if password.is_empty() {
            return Err(Error::PasswordEmpty);
        }
        if password.len() > WIFI_PASSWORD_MAX_LEN {
            return Err(Error::PasswordTooLong(password.len()));
        }
        if ssid.contains('\0') {
            return Err(Error::SsidNullCharacter);
        }
        if password.contains('\0') {
            return Err(Error::PasswordNullCharacter);
        }

        if password.len() < WIFI_PASSWORD_WPA2_MIN_LEN {
            warn!(
                "WiFi password for {:?} is shorter than {} characters, WPA2 networks will refuse it",
                ssid, WIFI_PASSWORD_WPA2_MIN_LEN
            );
        }

        Ok(Self { ssid, password })
    }

    pub fn ssid(&self) -> &'a str {
        self.ssid
    }

    pub fn password(&self) -> &'a str {
        self.password
    }

    /// SSID as the fixed-capacity string WiFi drivers take in their client config.
    pub fn ssid_string(&self) -> String<WIFI_SSID_MAX_LEN> {
        // length checked in `new`
        String::from_str(self.ssid).unwrap_or_default()
    }

    pub fn password_string(&self) -> String<WIFI_PASSWORD_MAX_LEN> {
        String::from_str(self.password).unwrap_or_default()
    }

    /// Writes the SSID as a NUL-terminated string for C drivers.
    pub fn ssid_c_str<'buf>(&self, buffer: &'buf mut [u8]) -> Result<&'buf CStr, Error> {
        cstr::write_c_str(self.ssid, buffer).map_err(Error::SsidCStr)
    }

    pub fn password_c_str<'buf>(&self, buffer: &'buf mut [u8]) -> Result<&'buf CStr, Error> {
        cstr::write_c_str(self.password, buffer).map_err(Error::PasswordCStr)
    }
}

impl fmt::Debug for WifiCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"********")
            .finish()
    }
}
