//! Nullable infrastructure for deterministic testing.
//!
//! Every chain-facing collaborator of the voting flow (nominee registry,
//! voting escrow, transaction submitter, query cache) plus the clock has an
//! in-memory implementation here that:
//! - Returns deterministic values
//! - Can be controlled programmatically
//! - Records what it was asked, for assertions
//!
//! Usage: swap real clients for nullables in tests.

pub mod cache;
pub mod clock;
pub mod escrow;
pub mod registry;
pub mod submitter;

pub use cache::NullVoteCache;
pub use clock::NullClock;
pub use escrow::NullVotingEscrow;
pub use registry::NullNomineeRegistry;
pub use submitter::NullSubmitter;
