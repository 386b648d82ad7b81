//! Nullable submitter: record vote batches without sending them.

use async_trait::async_trait;
use olas_types::TxHash;
use olas_vote_flow::{ClientError, VoteBatch, VoteSubmitter};
use std::sync::Mutex;

/// A submitter that records batches instead of sending them.
///
/// Transaction hashes are derived from a counter, so the first submission
/// returns a hash ending in `01`, the second `02`, and so on.
pub struct NullSubmitter {
    submitted: Mutex<Vec<VoteBatch>>,
    failure: Mutex<Option<ClientError>>,
}

impl NullSubmitter {
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Make every subsequent submission fail with `error`.
    pub fn fail_with(&self, error: ClientError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// All batches "sent" so far (for assertions).
    pub fn submitted(&self) -> Vec<VoteBatch> {
        self.submitted.lock().unwrap().clone()
    }
}

impl Default for NullSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoteSubmitter for NullSubmitter {
    async fn submit(&self, batch: &VoteBatch) -> Result<TxHash, ClientError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(batch.clone());

        let mut hash = [0u8; 32];
        hash[24..].copy_from_slice(&(submitted.len() as u64).to_be_bytes());
        Ok(TxHash::new(hash))
    }
}
