//! Nominees: the (address, chain) pairs a voter can direct weight to.

use crate::address::NomineeAddress;
use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// EVM chain id (or the protocol-assigned id for non-EVM chains).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Ethereum mainnet.
    pub const MAINNET: Self = Self(1);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| TypesError::InvalidChainId(format!("{s}: {e}")))
    }
}

/// A votable target on the vote-weighting contract.
///
/// Ordering is by address first, then chain id. The pair is unique within a
/// voting epoch, so a `Nominee` doubles as the normalized map key for prior votes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nominee {
    pub address: NomineeAddress,
    pub chain_id: ChainId,
}

/// Chain-qualified nominee identifier used to key prior-vote records.
pub type NomineeKey = Nominee;

impl Nominee {
    pub const fn new(address: NomineeAddress, chain_id: ChainId) -> Self {
        Self { address, chain_id }
    }
}

impl fmt::Display for Nominee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.address)
    }
}

impl FromStr for Nominee {
    type Err = TypesError;

    /// Parses `<chainId>:<address>`; a bare address is taken to be on mainnet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((chain, address)) => {
                let chain_id = chain
                    .parse()
                    .map_err(|_| TypesError::InvalidNomineeKey(s.to_string()))?;
                let address = address
                    .parse()
                    .map_err(|_| TypesError::InvalidNomineeKey(s.to_string()))?;
                Ok(Self::new(address, chain_id))
            }
            None => {
                let address = s
                    .parse()
                    .map_err(|_| TypesError::InvalidNomineeKey(s.to_string()))?;
                Ok(Self::new(address, ChainId::MAINNET))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x000000000000000000000000a0da53447c0f6c4987964d8463da7e6628b30f82";

    #[test]
    fn key_round_trips_through_display() {
        let nominee: Nominee = format!("100:{ADDR}").parse().unwrap();
        assert_eq!(nominee.chain_id, ChainId::new(100));
        assert_eq!(nominee.to_string(), format!("100:{ADDR}"));
        assert_eq!(nominee.to_string().parse::<Nominee>().unwrap(), nominee);
    }

    #[test]
    fn bare_address_defaults_to_mainnet() {
        let nominee: Nominee = ADDR.parse().unwrap();
        assert_eq!(nominee.chain_id, ChainId::MAINNET);
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(matches!(
            "abc:0x00".parse::<Nominee>(),
            Err(TypesError::InvalidNomineeKey(_))
        ));
        assert!("1:nothex".parse::<Nominee>().is_err());
    }

    #[test]
    fn same_address_on_two_chains_are_distinct() {
        let a: Nominee = format!("1:{ADDR}").parse().unwrap();
        let b: Nominee = format!("8453:{ADDR}").parse().unwrap();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn serde_shape_is_camel_case() {
        let nominee: Nominee = format!("10:{ADDR}").parse().unwrap();
        let json = serde_json::to_value(nominee).unwrap();
        assert_eq!(json["chainId"], 10);
        assert_eq!(json["address"], ADDR);
    }
}
