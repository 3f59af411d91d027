//! External ledger collaborators
//!
//! Read-only projections of on-chain subscription and credit state, plus the
//! privileged write preparer that encodes instruction payloads for an
//! external signer. Nothing in this module signs or submits transactions.

pub mod address;
pub mod calldata;
pub mod provider;
pub mod types;

pub use address::UserAddress;
pub use calldata::{prepare_write, WriteIntent};
pub use provider::{JsonRpcLedger, LedgerError, LedgerStateProvider};
pub use types::{Plan, SubscriptionSnapshot};
