//! Nullable voting escrow: veOLAS locks held in memory.

use async_trait::async_trait;
use olas_types::{AccountAddress, Timestamp};
use olas_vote_flow::{ClientError, LockInfo, VotingPowerGate};
use std::collections::HashMap;
use std::sync::Mutex;

/// A voting escrow with test-assigned locks.
///
/// Accounts without a lock read as the contract's zero value (no end, no slope).
pub struct NullVotingEscrow {
    locks: Mutex<HashMap<AccountAddress, LockInfo>>,
    failure: Mutex<Option<ClientError>>,
}

impl NullVotingEscrow {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
        }
    }

    pub fn set_lock(&self, account: AccountAddress, lock: LockInfo) {
        self.locks.lock().unwrap().insert(account, lock);
    }

    /// Make every subsequent query fail with `error`.
    pub fn fail_with(&self, error: ClientError) {
        *self.failure.lock().unwrap() = Some(error);
    }
}

impl Default for NullVotingEscrow {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VotingPowerGate for NullVotingEscrow {
    async fn lock_info(&self, account: &AccountAddress) -> Result<LockInfo, ClientError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self
            .locks
            .lock()
            .unwrap()
            .get(account)
            .copied()
            .unwrap_or(LockInfo {
                end: Timestamp::EPOCH,
                slope: 0,
            }))
    }
}
