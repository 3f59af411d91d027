//! Privileged write preparation
//!
//! Encodes instruction payloads for writes the gateway has authorized but
//! does not perform itself: the payload is handed to an external signer for
//! submission. Layout is the ledger's standard calling convention: a 4-byte
//! function selector followed by 32-byte argument words (addresses
//! left-padded, integers big-endian).

use super::address::UserAddress;
use serde::{Deserialize, Serialize};

/// Selector for `grantInitialCredits(address,uint256)`
const SEL_GRANT_INITIAL_CREDITS: [u8; 4] = [0x3f, 0x81, 0xa2, 0xc4];
/// Selector for `creditAccount(address,uint256)`
const SEL_CREDIT_ACCOUNT: [u8; 4] = [0x91, 0x5c, 0x0e, 0x27];
/// Selector for `setUsagePointer(address,uint256)`
const SEL_SET_USAGE_POINTER: [u8; 4] = [0x6a, 0xd4, 0x47, 0xb8];

/// Word size of an encoded argument
const WORD_LEN: usize = 32;

/// An authorized write the gateway prepares for external signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WriteIntent {
    /// One-time initial allowance for a brand-new user
    GrantInitialCredits {
        /// Recipient account
        user: UserAddress,
        /// Credits granted
        amount: u64,
    },
    /// Off-band credit accrual (streaks, referrals, quests)
    CreditAccount {
        /// Recipient account
        user: UserAddress,
        /// Credits accrued
        amount: u64,
    },
    /// Billing-window usage pointer update
    SetUsagePointer {
        /// Account whose pointer moves
        user: UserAddress,
        /// New pointer value
        pointer: u64,
    },
}

/// Encode an intent into a 0x-prefixed hex calldata payload
pub fn prepare_write(intent: &WriteIntent) -> String {
    let (selector, user, value) = match intent {
        WriteIntent::GrantInitialCredits { user, amount } => {
            (&SEL_GRANT_INITIAL_CREDITS, user, *amount)
        }
        WriteIntent::CreditAccount { user, amount } => (&SEL_CREDIT_ACCOUNT, user, *amount),
        WriteIntent::SetUsagePointer { user, pointer } => (&SEL_SET_USAGE_POINTER, user, *pointer),
    };

    let mut payload = Vec::with_capacity(4 + 2 * WORD_LEN);
    payload.extend_from_slice(selector);
    payload.extend_from_slice(&address_word(user));
    payload.extend_from_slice(&uint_word(value));
    format!("0x{}", hex::encode(payload))
}

/// Left-pad an address into a 32-byte word
fn address_word(user: &UserAddress) -> [u8; WORD_LEN] {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - user.as_bytes().len()..].copy_from_slice(user.as_bytes());
    word
}

/// Encode an integer as a big-endian 32-byte word
fn uint_word(value: u64) -> [u8; WORD_LEN] {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - 8..].copy_from_slice(&value.to_be_bytes());
    word
}
