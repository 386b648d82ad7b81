//! Chain-facing collaborator traits and the submission call shape.

use crate::error::ClientError;
use crate::gate::LockInfo;
use async_trait::async_trait;
use olas_types::{AccountAddress, BasisPoints, ChainId, Nominee, NomineeAddress, TxHash};
use olas_voting::VoteOperation;
use serde::{Deserialize, Serialize};

/// Nominee status as maintained by governance on the vote-weighting contract.
#[async_trait]
pub trait NomineeRegistry: Send + Sync {
    /// The subset of `nominees` that has been removed.
    async fn removed_nominees(&self, nominees: &[Nominee]) -> Result<Vec<Nominee>, ClientError>;

    /// The subset of `nominees` that is administratively disabled.
    async fn disabled_nominees(&self, nominees: &[Nominee]) -> Result<Vec<Nominee>, ClientError>;
}

/// Read-only view of the voter's veOLAS lock.
#[async_trait]
pub trait VotingPowerGate: Send + Sync {
    async fn lock_info(&self, account: &AccountAddress) -> Result<LockInfo, ClientError>;
}

/// Sends a batch as a single transaction.
#[async_trait]
pub trait VoteSubmitter: Send + Sync {
    async fn submit(&self, batch: &VoteBatch) -> Result<TxHash, ClientError>;
}

/// Client-side cache of chain reads for an account.
pub trait VoteCache: Send + Sync {
    fn invalidate(&self, account: &AccountAddress);
}

/// Arguments of `voteForNomineeWeights`: three index-aligned arrays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteBatch {
    pub account: AccountAddress,
    pub nominees: Vec<NomineeAddress>,
    pub chain_ids: Vec<ChainId>,
    pub weights: Vec<BasisPoints>,
}

impl VoteBatch {
    /// Keeps the order of `operations`.
    pub fn from_operations(account: AccountAddress, operations: &[VoteOperation]) -> Self {
        Self {
            account,
            nominees: operations.iter().map(|op| op.address).collect(),
            chain_ids: operations.iter().map(|op| op.chain_id).collect(),
            weights: operations.iter().map(|op| op.weight).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nominees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nominees.is_empty()
    }

    /// Rebuild the operations, in batch order.
    pub fn operations(&self) -> Vec<VoteOperation> {
        self.nominees
            .iter()
            .zip(&self.chain_ids)
            .zip(&self.weights)
            .map(|((address, chain_id), weight)| {
                VoteOperation::new(Nominee::new(*address, *chain_id), *weight)
            })
            .collect()
    }
}
