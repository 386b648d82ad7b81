use olas_types::{Nominee, Percent, TypesError};
use thiserror::Error;

/// Malformed allocation or prior-vote input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("weight for {nominee} is negative: {weight}")]
    NegativeWeight { nominee: Nominee, weight: Percent },

    #[error("weight for {nominee} exceeds 100%: {weight}")]
    WeightAboveMax { nominee: Nominee, weight: Percent },

    #[error("total weight exceeds 100%: {total}")]
    TotalExceedsMax { total: Percent },

    #[error("nominee {0} appears more than once")]
    DuplicateNominee(Nominee),

    #[error("prior vote for {0} appears more than once")]
    DuplicatePriorVote(Nominee),

    #[error("prior voting power for {nominee} is negative: {power}")]
    NegativePriorPower { nominee: Nominee, power: Percent },

    #[error("prior voting power for {nominee} exceeds 100%: {power}")]
    PriorPowerAboveMax { nominee: Nominee, power: Percent },

    #[error("prior voting power exceeds 100%: {total}")]
    PriorPowerExceedsMax { total: Percent },

    #[error(transparent)]
    Types(#[from] TypesError),
}
