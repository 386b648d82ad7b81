//! Nominee vote allocation for the Olas vote-weighting contract.
//!
//! A voter distributes up to 100% of their veOLAS voting power across nominees
//! (staking contracts on any supported chain). The contract applies a batch of
//! weight changes one at a time and re-checks the 10 000 bp per-user cap after
//! each one, so the order of a batch matters:
//!
//! 1. [`AllocationSet`] validates the desired allocation.
//! 2. [`Retainer::allocate`] tops it up to exactly 100% with the retainer nominee.
//! 3. [`reconcile`] turns it, together with the user's prior [`UserVotes`], into an
//!    ordered list of [`VoteOperation`]s that never breaches the cap.
//!
//! [`CapSimulation`] replays a batch against the prior state and [`RoundingDrift`]
//! reports basis points lost to flooring.

pub mod allocation;
pub mod error;
pub mod reconcile;
pub mod retainer;
pub mod simulate;
pub mod user_vote;

pub use allocation::{Allocation, AllocationMetadata, AllocationSet};
pub use error::VoteError;
pub use reconcile::{reconcile, CarriedOver, VoteOperation, VotePlan};
pub use retainer::Retainer;
pub use simulate::{CapSimulation, CapStep, RoundingDrift};
pub use user_vote::{UserVote, UserVotes, VotePower};
