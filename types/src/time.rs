//! Timestamp type used for lock expiry and epoch arithmetic.
//!
//! Timestamps are Unix epoch seconds (UTC), matching `block.timestamp`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One voting epoch on the vote-weighting contract.
pub const WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Start of the epoch following the one containing `self`.
    ///
    /// Votes cast now take effect from this boundary. An `epoch_secs` of zero
    /// is treated as one second.
    pub fn next_epoch_start(&self, epoch_secs: u64) -> Self {
        let epoch = epoch_secs.max(1);
        Self((self.0 / epoch).saturating_add(1).saturating_mul(epoch))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
