// src/catalog/subnet.rs
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetDetail {
    pub name: String,
    pub function: String,
    pub free_tier: String,
    pub key_url: String,
}

impl SubnetDetail {
    /// Default record for subnet ids missing from the detail table.
    pub fn fallback(id: &str, key_url: &str) -> Self {
        Self {
            name: id.to_string(),
            function: "Bittensor subnet".to_string(),
            free_tier: "Check docs".to_string(),
            key_url: key_url.to_string(),
        }
    }

    // A "None" marker in the free-tier note means the subnet is paid-only
    pub fn has_free_tier(&self) -> bool {
        !self.free_tier.contains("None")
    }
}
