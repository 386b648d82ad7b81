//! End-to-end nominee voting flow.
//!
//! Wires the pure reconciliation in `olas-voting` to the chain-facing
//! collaborators, which are abstracted behind traits:
//!
//! - [`NomineeRegistry`]: has governance removed or disabled a nominee?
//! - [`VotingPowerGate`]: the voter's veOLAS lock (expiry and slope).
//! - [`VoteSubmitter`]: sends the batch as one `voteForNomineeWeights` call.
//! - [`VoteCache`]: client-side query cache, invalidated after failures.

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod gate;
pub mod logging;

pub use client::{NomineeRegistry, VoteBatch, VoteCache, VoteSubmitter, VotingPowerGate};
pub use config::VoteConfig;
pub use error::{ClientError, FlowError, Precondition};
pub use flow::{VoteFlow, VoteReceipt};
pub use gate::LockInfo;
pub use logging::{init_logging, LogFormat};
