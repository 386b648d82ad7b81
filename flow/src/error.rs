use olas_types::{Nominee, Timestamp};
use olas_voting::VoteError;
use thiserror::Error;

/// Failure reported by an external chain client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("request rejected by user: {0}")]
    Rejected(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("transaction reverted: {0}")]
    Reverted(String),
}

/// A gate that must pass before votes are submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Precondition {
    #[error("nominees removed by governance: {}", join(.0))]
    RemovedNominees(Vec<Nominee>),

    #[error("nominees disabled: {}", join(.0))]
    DisabledNominees(Vec<Nominee>),

    #[error("veOLAS lock ends at {end}, before the next epoch starts at {next_epoch}")]
    LockExpired { end: Timestamp, next_epoch: Timestamp },

    #[error("no voting power: veOLAS slope is {slope}")]
    NonPositiveSlope { slope: i128 },
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("invalid allocation: {0}")]
    Validation(#[from] VoteError),

    #[error("cannot vote: {0}")]
    PreconditionFailed(#[from] Precondition),

    #[error("failed to read voting state: {0}")]
    Query(ClientError),

    #[error("vote submission failed: {0}")]
    Submission(ClientError),

    #[error("config error: {0}")]
    Config(String),
}

impl FlowError {
    /// Whether cached chain state may be stale after this error.
    pub fn invalidates_cache(&self) -> bool {
        matches!(
            self,
            Self::PreconditionFailed(_) | Self::Query(_) | Self::Submission(_)
        )
    }
}

fn join(nominees: &[Nominee]) -> String {
    nominees
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
