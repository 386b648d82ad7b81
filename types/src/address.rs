//! Nominee and account address types.
//!
//! Nominees are identified on the vote-weighting contract by a 32-byte value so
//! that non-EVM targets (e.g. Solana programs) fit the same slot. EVM addresses
//! are left-padded with twelve zero bytes.

use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 32-byte nominee address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NomineeAddress([u8; 32]);

impl NomineeAddress {
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Left-pad a 20-byte EVM address to the 32-byte nominee form.
    pub fn from_evm(address: [u8; 20]) -> Self {
        let mut bytes = [0u8; 32];
        bytes[12..].copy_from_slice(&address);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The 20-byte EVM address, if the upper twelve bytes are zero.
    pub fn as_evm(&self) -> Option<[u8; 20]> {
        if self.0[..12].iter().any(|b| *b != 0) {
            return None;
        }
        let mut out = [0u8; 20];
        out.copy_from_slice(&self.0[12..]);
        Some(out)
    }
}

impl FromStr for NomineeAddress {
    type Err = TypesError;

    /// Accepts `0x`-prefixed (or bare) hex of either 20 or 32 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = decode_hex(s)?;
        match raw.len() {
            20 => {
                let mut evm = [0u8; 20];
                evm.copy_from_slice(&raw);
                Ok(Self::from_evm(evm))
            }
            32 => {
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(&raw);
                Ok(Self(bytes))
            }
            n => Err(TypesError::InvalidAddress(format!(
                "{s}: expected 20 or 32 bytes, got {n}"
            ))),
        }
    }
}

impl fmt::Display for NomineeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for NomineeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_evm() {
            Some(evm) => write!(f, "NomineeAddress(0x{})", hex::encode(evm)),
            None => write!(f, "NomineeAddress(0x{})", hex::encode(self.0)),
        }
    }
}

impl Serialize for NomineeAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NomineeAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A 20-byte EVM account (the voter).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress([u8; 20]);

impl AccountAddress {
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for AccountAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = decode_hex(s)?;
        let bytes: [u8; 20] = raw.try_into().map_err(|v: Vec<u8>| {
            TypesError::InvalidAddress(format!("{s}: expected 20 bytes, got {}", v.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({self})")
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, TypesError> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| TypesError::InvalidAddress(format!("{s}: {e}")))
}
