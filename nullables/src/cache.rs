//! Nullable query cache: records invalidations.

use olas_types::AccountAddress;
use olas_vote_flow::VoteCache;
use std::sync::Mutex;

#[derive(Default)]
pub struct NullVoteCache {
    invalidated: Mutex<Vec<AccountAddress>>,
}

impl NullVoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts invalidated so far, in call order.
    pub fn invalidated(&self) -> Vec<AccountAddress> {
        self.invalidated.lock().unwrap().clone()
    }
}

impl VoteCache for NullVoteCache {
    fn invalidate(&self, account: &AccountAddress) {
        self.invalidated.lock().unwrap().push(*account);
    }
}
