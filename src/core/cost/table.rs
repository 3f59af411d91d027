//! Inference mode cost table

use crate::config::BillingConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cost computation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    /// Mode is not in the cost table
    #[error("unknown inference mode: {0}")]
    UnknownMode(String),
    /// Quantity is not a positive integer
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
}

/// A named inference variant with a fixed unit credit cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceMode {
    /// Plain prediction
    Basic,
    /// Prediction with tag extraction
    Tags,
    /// High-accuracy price estimation
    PriceAccuracy,
    /// Full analysis
    Full,
}

impl InferenceMode {
    /// All known modes
    pub const ALL: [InferenceMode; 4] = [
        InferenceMode::Basic,
        InferenceMode::Tags,
        InferenceMode::PriceAccuracy,
        InferenceMode::Full,
    ];

    /// Canonical mode name
    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceMode::Basic => "basic",
            InferenceMode::Tags => "tags",
            InferenceMode::PriceAccuracy => "price_accuracy",
            InferenceMode::Full => "full",
        }
    }

    /// Whether subscription capping for this mode consults the global cap
    /// across tiers instead of the plan's own monthly cap
    pub fn uses_global_cap(&self) -> bool {
        matches!(self, InferenceMode::PriceAccuracy | InferenceMode::Full)
    }
}

impl fmt::Display for InferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InferenceMode {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(InferenceMode::Basic),
            "tags" => Ok(InferenceMode::Tags),
            "price_accuracy" => Ok(InferenceMode::PriceAccuracy),
            "full" => Ok(InferenceMode::Full),
            other => Err(CostError::UnknownMode(other.to_string())),
        }
    }
}

/// Unit credit costs per inference mode
#[derive(Debug, Clone)]
pub struct CostTable {
    unit_costs: HashMap<InferenceMode, u64>,
}

impl CostTable {
    /// Build the cost table from billing configuration
    ///
    /// Config entries with unknown mode names are rejected at startup rather
    /// than silently ignored.
    pub fn from_config(config: &BillingConfig) -> Result<Self, CostError> {
        let mut unit_costs = HashMap::new();
        for (name, cost) in &config.unit_costs {
            let mode: InferenceMode = name.parse()?;
            unit_costs.insert(mode, *cost);
        }
        // Any mode missing from config falls back to its default cost
        for mode in InferenceMode::ALL {
            unit_costs.entry(mode).or_insert_with(|| default_cost(mode));
        }
        Ok(Self { unit_costs })
    }

    /// Credit cost of a single unit of the given mode
    pub fn unit_cost(&self, mode: InferenceMode) -> u64 {
        self.unit_costs
            .get(&mode)
            .copied()
            .unwrap_or_else(|| default_cost(mode))
    }

    /// Total credit cost of `quantity` units of `mode`
    pub fn total_cost(&self, mode: InferenceMode, quantity: u64) -> Result<u64, CostError> {
        if quantity == 0 {
            return Err(CostError::InvalidQuantity(0));
        }
        Ok(self.unit_cost(mode).saturating_mul(quantity))
    }

    /// Cost quote for a caller-supplied mode name
    ///
    /// Unknown modes and non-positive quantities are validation failures.
    pub fn quote(&self, mode: &str, quantity: i64) -> Result<u64, CostError> {
        let mode: InferenceMode = mode.parse()?;
        let quantity =
            u64::try_from(quantity).map_err(|_| CostError::InvalidQuantity(quantity))?;
        self.total_cost(mode, quantity)
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            unit_costs: InferenceMode::ALL
                .into_iter()
                .map(|mode| (mode, default_cost(mode)))
                .collect(),
        }
    }
}

/// Reference unit costs
fn default_cost(mode: InferenceMode) -> u64 {
    match mode {
        InferenceMode::Basic => 1,
        InferenceMode::Tags => 2,
        InferenceMode::PriceAccuracy => 3,
        InferenceMode::Full => 5,
    }
}
