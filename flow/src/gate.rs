//! Pre-submission gates on nominee status and voting power.

use crate::client::{NomineeRegistry, VotingPowerGate};
use crate::error::{FlowError, Precondition};
use olas_types::{AccountAddress, Nominee, Timestamp};
use serde::{Deserialize, Serialize};

/// The voter's veOLAS lock as read from the voting-escrow contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockInfo {
    /// When the lock unlocks.
    pub end: Timestamp,
    /// Rate at which voting power decays; zero or negative means no power.
    pub slope: i128,
}

impl LockInfo {
    /// A vote takes effect from the next epoch boundary, so the lock must
    /// outlive it, and the slope must be strictly positive.
    pub fn check(&self, now: Timestamp, epoch_secs: u64) -> Result<(), Precondition> {
        if self.slope <= 0 {
            return Err(Precondition::NonPositiveSlope { slope: self.slope });
        }
        let next_epoch = now.next_epoch_start(epoch_secs);
        if self.end <= next_epoch {
            return Err(Precondition::LockExpired {
                end: self.end,
                next_epoch,
            });
        }
        Ok(())
    }
}

/// Fails if governance has removed or disabled any of `nominees`.
pub async fn ensure_nominees_active(
    registry: &dyn NomineeRegistry,
    nominees: &[Nominee],
) -> Result<(), FlowError> {
    let removed = registry
        .removed_nominees(nominees)
        .await
        .map_err(FlowError::Query)?;
    if !removed.is_empty() {
        return Err(Precondition::RemovedNominees(removed).into());
    }

    let disabled = registry
        .disabled_nominees(nominees)
        .await
        .map_err(FlowError::Query)?;
    if !disabled.is_empty() {
        return Err(Precondition::DisabledNominees(disabled).into());
    }
    Ok(())
}

/// Fails unless `account` holds an unexpired lock with positive slope.
pub async fn ensure_voting_power(
    gate: &dyn VotingPowerGate,
    account: &AccountAddress,
    now: Timestamp,
    epoch_secs: u64,
) -> Result<LockInfo, FlowError> {
    let lock = gate.lock_info(account).await.map_err(FlowError::Query)?;
    lock.check(now, epoch_secs)?;
    Ok(lock)
}
