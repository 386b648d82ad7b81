//! The voting flow: validate → top up → gate → reconcile → submit.

use std::sync::Arc;

use olas_types::{AccountAddress, Nominee, Timestamp, TxHash};
use olas_voting::{reconcile, Allocation, AllocationSet, Retainer, UserVotes, VoteOperation};
use tracing::{info, warn};

use crate::client::{NomineeRegistry, VoteBatch, VoteCache, VoteSubmitter, VotingPowerGate};
use crate::config::VoteConfig;
use crate::error::FlowError;
use crate::gate::{ensure_nominees_active, ensure_voting_power};

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    pub tx_hash: TxHash,
    pub operations: Vec<VoteOperation>,
}

/// Runs a vote end to end against the configured collaborators.
///
/// Holds no mutable state; every call works on the snapshot it is given.
pub struct VoteFlow {
    registry: Arc<dyn NomineeRegistry>,
    gate: Arc<dyn VotingPowerGate>,
    submitter: Arc<dyn VoteSubmitter>,
    cache: Arc<dyn VoteCache>,
    retainer: Retainer,
    epoch_secs: u64,
}

impl VoteFlow {
    pub fn new(
        registry: Arc<dyn NomineeRegistry>,
        gate: Arc<dyn VotingPowerGate>,
        submitter: Arc<dyn VoteSubmitter>,
        cache: Arc<dyn VoteCache>,
        config: &VoteConfig,
    ) -> Self {
        Self {
            registry,
            gate,
            submitter,
            cache,
            retainer: config.retainer(),
            epoch_secs: config.epoch_secs,
        }
    }

    /// Validate `allocations`, top them up with the retainer and reconcile
    /// against `prior`. Touches no collaborator.
    pub fn plan(
        &self,
        allocations: Vec<Allocation>,
        prior: &UserVotes,
    ) -> Result<Vec<VoteOperation>, FlowError> {
        let normalized = self.normalize(allocations)?;
        Ok(reconcile(&normalized, prior))
    }

    /// Check the gates, reconcile and submit.
    ///
    /// On any failure after validation the account's cached chain state is
    /// invalidated so that a retry starts from fresh reads.
    pub async fn vote(
        &self,
        account: AccountAddress,
        allocations: Vec<Allocation>,
        prior: &UserVotes,
        now: Timestamp,
    ) -> Result<VoteReceipt, FlowError> {
        let normalized = self.normalize(allocations)?;

        match self.gate_and_submit(account, &normalized, prior, now).await {
            Ok(receipt) => {
                info!(
                    %account,
                    tx = %receipt.tx_hash,
                    operations = receipt.operations.len(),
                    "nominee votes submitted"
                );
                Ok(receipt)
            }
            Err(err) => {
                warn!(%account, error = %err, "nominee vote aborted");
                if err.invalidates_cache() {
                    self.cache.invalidate(&account);
                }
                Err(err)
            }
        }
    }

    fn normalize(&self, allocations: Vec<Allocation>) -> Result<AllocationSet, FlowError> {
        let set = AllocationSet::new(allocations)?;
        Ok(self.retainer.allocate(set))
    }

    async fn gate_and_submit(
        &self,
        account: AccountAddress,
        allocations: &AllocationSet,
        prior: &UserVotes,
        now: Timestamp,
    ) -> Result<VoteReceipt, FlowError> {
        let nominees: Vec<Nominee> = allocations.iter().map(|a| a.nominee).collect();
        ensure_nominees_active(self.registry.as_ref(), &nominees).await?;
        ensure_voting_power(self.gate.as_ref(), &account, now, self.epoch_secs).await?;

        let operations = reconcile(allocations, prior);
        let batch = VoteBatch::from_operations(account, &operations);
        let tx_hash = self
            .submitter
            .submit(&batch)
            .await
            .map_err(FlowError::Submission)?;

        Ok(VoteReceipt {
            tx_hash,
            operations,
        })
    }
}
