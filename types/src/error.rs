//! Parsing errors for the fundamental types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid nominee key: {0}")]
    InvalidNomineeKey(String),

    #[error("invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("invalid percentage: {0}")]
    InvalidPercent(String),

    #[error("invalid basis points: {0}")]
    InvalidBasisPoints(String),

    #[error("invalid transaction hash: {0}")]
    InvalidTxHash(String),
}
