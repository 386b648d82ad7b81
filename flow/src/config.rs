//! Voting configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use olas_types::{ChainId, Nominee, NomineeAddress, WEEK_SECS};
use olas_voting::retainer::MAINNET_RETAINER;
use olas_voting::Retainer;

use crate::error::FlowError;
use crate::logging::LogFormat;

/// Configuration for vote planning and submission.
///
/// Can be loaded from a TOML file via [`VoteConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteConfig {
    /// Address of the retainer nominee that absorbs unallocated weight.
    #[serde(default = "default_retainer_address")]
    pub retainer_address: NomineeAddress,

    /// Chain the retainer nominee lives on.
    #[serde(default = "default_retainer_chain_id")]
    pub retainer_chain_id: ChainId,

    /// Length of a voting epoch in seconds.
    #[serde(default = "default_epoch_secs")]
    pub epoch_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_retainer_address() -> NomineeAddress {
    MAINNET_RETAINER.address
}

fn default_retainer_chain_id() -> ChainId {
    MAINNET_RETAINER.chain_id
}

fn default_epoch_secs() -> u64 {
    WEEK_SECS
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl VoteConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| FlowError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, FlowError> {
        let config: Self = toml::from_str(s).map_err(|e| FlowError::Config(e.to_string()))?;
        if config.epoch_secs == 0 {
            return Err(FlowError::Config("epoch_secs must be positive".to_string()));
        }
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, FlowError> {
        toml::to_string_pretty(self).map_err(|e| FlowError::Config(e.to_string()))
    }

    pub fn retainer(&self) -> Retainer {
        Retainer::new(Nominee::new(self.retainer_address, self.retainer_chain_id))
    }

    pub fn log_format(&self) -> Result<LogFormat, FlowError> {
        self.log_format.parse()
    }
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            retainer_address: default_retainer_address(),
            retainer_chain_id: default_retainer_chain_id(),
            epoch_secs: default_epoch_secs(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = VoteConfig::default();
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = VoteConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = VoteConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.epoch_secs, WEEK_SECS);
        assert_eq!(config.retainer().nominee(), MAINNET_RETAINER);
        assert_eq!(config.log_format, "human");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            retainer_address = "0x00000000000000000000000000000000000000aa"
            retainer_chain_id = 100
            log_level = "debug"
        "#;
        let config = VoteConfig::from_toml_str(toml).expect("should parse");
        let retainer = config.retainer().nominee();
        assert_eq!(retainer.chain_id, ChainId::new(100));
        assert_eq!(retainer.address.as_evm().unwrap()[19], 0xaa);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.epoch_secs, WEEK_SECS); // default
    }

    #[test]
    fn zero_epoch_is_rejected() {
        let err = VoteConfig::from_toml_str("epoch_secs = 0").unwrap_err();
        assert!(matches!(err, FlowError::Config(_)));
    }

    #[test]
    fn bad_address_is_a_config_error() {
        let err = VoteConfig::from_toml_str(r#"retainer_address = "0x12""#).unwrap_err();
        assert!(matches!(err, FlowError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "epoch_secs = 86400").expect("write");
        let config = VoteConfig::from_toml_file(file.path()).expect("should load");
        assert_eq!(config.epoch_secs, 86_400);
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = VoteConfig::from_toml_file("/nonexistent/olas-vote.toml");
        assert!(matches!(result, Err(FlowError::Config(_))));
    }
}
