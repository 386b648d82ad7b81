//! Nullable nominee registry: governance status held in memory.

use async_trait::async_trait;
use olas_types::Nominee;
use olas_vote_flow::{ClientError, NomineeRegistry};
use std::collections::HashSet;
use std::sync::Mutex;

/// A nominee registry whose removed/disabled sets are set by the test.
pub struct NullNomineeRegistry {
    removed: Mutex<HashSet<Nominee>>,
    disabled: Mutex<HashSet<Nominee>>,
    /// Returned by every query while set.
    failure: Mutex<Option<ClientError>>,
}

impl NullNomineeRegistry {
    pub fn new() -> Self {
        Self {
            removed: Mutex::new(HashSet::new()),
            disabled: Mutex::new(HashSet::new()),
            failure: Mutex::new(None),
        }
    }

    /// Mark a nominee as removed by governance.
    pub fn remove(&self, nominee: Nominee) {
        self.removed.lock().unwrap().insert(nominee);
    }

    /// Mark a nominee as disabled.
    pub fn disable(&self, nominee: Nominee) {
        self.disabled.lock().unwrap().insert(nominee);
    }

    /// Make every subsequent query fail with `error`.
    pub fn fail_with(&self, error: ClientError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    fn matching(
        &self,
        set: &Mutex<HashSet<Nominee>>,
        nominees: &[Nominee],
    ) -> Result<Vec<Nominee>, ClientError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        let set = set.lock().unwrap();
        Ok(nominees.iter().filter(|n| set.contains(n)).copied().collect())
    }
}

impl Default for NullNomineeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NomineeRegistry for NullNomineeRegistry {
    async fn removed_nominees(&self, nominees: &[Nominee]) -> Result<Vec<Nominee>, ClientError> {
        self.matching(&self.removed, nominees)
    }

    async fn disabled_nominees(&self, nominees: &[Nominee]) -> Result<Vec<Nominee>, ClientError> {
        self.matching(&self.disabled, nominees)
    }
}
