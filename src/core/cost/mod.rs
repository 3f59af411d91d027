//! Cost and crediting policy
//!
//! The cost table maps inference modes to unit credit costs; the credit
//! calculator maps off-band accrual reasons to credit amounts. Both are pure
//! policy with no external state.

mod credits;
mod table;

#[cfg(test)]
mod tests;

pub use credits::{AccrualReason, CreditCalculator};
pub use table::{CostError, CostTable, InferenceMode};
