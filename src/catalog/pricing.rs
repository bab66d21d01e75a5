// src/catalog/pricing.rs
use serde::{Serialize, Deserialize};

/// Placeholder per-request pricing. Kept as catalog data rather than
/// hard-coded in the analysis code so it can be overridden per catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Pricing {
    /// Flat figure quoted by the feasibility analysis.
    pub cost_per_request: f64,
    /// Quoted per request for subnets without a free tier.
    pub paid_tier_cost: f64,
    /// Charged per subnet by the execution summary.
    pub unit_price: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            cost_per_request: 0.02,
            paid_tier_cost: 0.05,
            unit_price: 0.02,
        }
    }
}
