//! Snapshot of a user's prior votes, as read from the vote-weighting contract.

use crate::error::VoteError;
use olas_types::{BasisPoints, Nominee, Percent, Timestamp};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// A vote's power and its decay parameters at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotePower {
    pub power: Percent,
    #[serde(default)]
    pub slope: u128,
    #[serde(default)]
    pub end: Timestamp,
}

/// The user's committed vote for one nominee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVote {
    /// Power applied in the current epoch.
    pub current: VotePower,
    /// Power that applies from the next epoch.
    #[serde(default)]
    pub next: VotePower,
}

impl UserVote {
    pub fn with_current_power(power: Percent) -> Self {
        Self {
            current: VotePower {
                power,
                ..VotePower::default()
            },
            next: VotePower {
                power,
                ..VotePower::default()
            },
        }
    }

    /// The committed weight the contract counts against the cap.
    pub fn committed(&self) -> BasisPoints {
        self.current.power.to_basis_points()
    }
}

/// Immutable snapshot of a user's votes keyed by nominee.
///
/// Construction rejects negative powers, single powers above 100% and totals
/// above 100%. Iteration is in ascending nominee order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, UserVote>")]
pub struct UserVotes {
    votes: BTreeMap<Nominee, UserVote>,
}

impl UserVotes {
    pub fn new(votes: BTreeMap<Nominee, UserVote>) -> Result<Self, VoteError> {
        for (nominee, vote) in &votes {
            if vote.current.power.is_negative() {
                return Err(VoteError::NegativePriorPower {
                    nominee: *nominee,
                    power: vote.current.power,
                });
            }
            if vote.current.power > Percent::HUNDRED {
                return Err(VoteError::PriorPowerAboveMax {
                    nominee: *nominee,
                    power: vote.current.power,
                });
            }
        }
        let total: Percent = votes.values().map(|v| v.current.power).sum();
        if total > Percent::HUNDRED {
            return Err(VoteError::PriorPowerExceedsMax { total });
        }
        Ok(Self { votes })
    }

    /// Build from a list, rejecting repeated nominees.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Nominee, UserVote)>,
    ) -> Result<Self, VoteError> {
        let mut votes = BTreeMap::new();
        for (nominee, vote) in entries {
            if votes.insert(nominee, vote).is_some() {
                return Err(VoteError::DuplicatePriorVote(nominee));
            }
        }
        Self::new(votes)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, nominee: &Nominee) -> Option<&UserVote> {
        self.votes.get(nominee)
    }

    pub fn contains(&self, nominee: &Nominee) -> bool {
        self.votes.contains_key(nominee)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Nominee, &UserVote)> {
        self.votes.iter()
    }

    pub fn nominees(&self) -> impl Iterator<Item = &Nominee> {
        self.votes.keys()
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Sum of committed weights, in basis points.
    pub fn committed_total(&self) -> BasisPoints {
        self.votes.values().map(UserVote::committed).sum()
    }

    /// Votes by descending current power; equal powers fall back to ascending nominee order.
    pub fn by_descending_power(&self) -> Vec<(Nominee, UserVote)> {
        let mut sorted: Vec<(Nominee, UserVote)> =
            self.votes.iter().map(|(n, v)| (*n, *v)).collect();
        sorted.sort_by(|(na, a), (nb, b)| {
            b.current
                .power
                .cmp(&a.current.power)
                .then_with(|| na.cmp(nb))
        });
        sorted
    }
}

impl TryFrom<BTreeMap<String, UserVote>> for UserVotes {
    type Error = VoteError;

    /// Keys are `<chainId>:<address>` or a bare mainnet address.
    fn try_from(raw: BTreeMap<String, UserVote>) -> Result<Self, Self::Error> {
        let entries = raw
            .into_iter()
            .map(|(key, vote)| Ok((key.parse::<Nominee>()?, vote)))
            .collect::<Result<Vec<_>, VoteError>>()?;
        Self::from_entries(entries)
    }
}

impl Serialize for UserVotes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.votes.len()))?;
        for (nominee, vote) in &self.votes {
            map.serialize_entry(&nominee.to_string(), vote)?;
        }
        map.end()
    }
}
