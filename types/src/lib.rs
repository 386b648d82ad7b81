//! Fundamental types for Olas nominee voting.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! nominee and account addresses, chain ids, percentage and basis-point weights,
//! timestamps and transaction hashes.

pub mod address;
pub mod error;
pub mod hash;
pub mod nominee;
pub mod time;
pub mod weight;

pub use address::{AccountAddress, NomineeAddress};
pub use error::TypesError;
pub use hash::TxHash;
pub use nominee::{ChainId, Nominee, NomineeKey};
pub use time::{Timestamp, WEEK_SECS};
pub use weight::{BasisPoints, Percent, MAX_WEIGHT_BPS};
