//! User account address parsing and formatting
//!
//! Addresses are the 0x-prefixed 20-byte hex identifiers the ledger keys
//! account state by. Malformed addresses are rejected before any state read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a raw account address in bytes
pub const ADDRESS_LEN: usize = 20;

/// A ledger account address identifying a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserAddress([u8; ADDRESS_LEN]);

/// Address parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Missing the 0x prefix
    #[error("address must start with 0x")]
    MissingPrefix,
    /// Wrong number of hex digits
    #[error("address must be {expected} hex chars, got {actual}")]
    BadLength {
        /// Expected digit count
        expected: usize,
        /// Actual digit count
        actual: usize,
    },
    /// Non-hex characters in the body
    #[error("address contains non-hex characters")]
    BadHex,
}

impl UserAddress {
    /// Construct an address from raw bytes
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw address bytes
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl FromStr for UserAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;

        if body.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::BadLength {
                expected: ADDRESS_LEN * 2,
                actual: body.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| AddressError::BadHex)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for UserAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for UserAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for UserAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
