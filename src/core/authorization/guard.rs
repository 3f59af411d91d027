//! Initial grant guard
//!
//! Process-local record of users already judged granted the one-time initial
//! allowance. The engine only reads it; the privileged grant path marks it
//! once the grant payload has been prepared. A restart clears the set, so the
//! ledger remains the source of truth for exactly-once grants across
//! processes.

use crate::ledger::UserAddress;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Set of users for whom an initial grant has been judged granted
#[derive(Debug, Clone, Default)]
pub struct InitialGrantGuard {
    granted: Arc<RwLock<HashSet<UserAddress>>>,
}

impl InitialGrantGuard {
    /// Create an empty guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the user has already been marked granted in this process
    pub async fn is_marked(&self, user: &UserAddress) -> bool {
        self.granted.read().await.contains(user)
    }

    /// Mark the user granted; returns false if already marked
    pub async fn mark(&self, user: &UserAddress) -> bool {
        self.granted.write().await.insert(*user)
    }
}
