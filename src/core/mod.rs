//! Core gateway functionality
//!
//! The authorization arbitration engine and the components it composes:
//! the per-user rate limiter and the cost/credit policy tables.

pub mod authorization;
pub mod cost;
pub mod rate_limiter;
