// src/catalog/mod.rs
use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Serialize, Deserialize};

pub mod category;
pub mod pricing;
pub mod subnet;

// Re-export commonly used types
pub use category::Category;
pub use pricing::Pricing;
pub use subnet::SubnetDetail;

const DEFAULT_CATALOG: &str = include_str!("default.ron");

/// Immutable reference data for the wizard: the category cards, the
/// per-subnet detail table, and the key-acquisition URL table. Loaded
/// once at startup and never mutated afterwards.
///
/// The detail and URL tables are partial; lookups resolve misses to an
/// explicit fallback record rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub subnets: HashMap<String, SubnetDetail>,
    pub key_urls: HashMap<String, String>,
    pub default_key_url: String,
    pub pricing: Pricing,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        ron::from_str(DEFAULT_CATALOG).context("Failed to parse built-in catalog")
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Resolved detail record for a subnet id. Unknown ids get the
    /// fallback record carrying the raw id and the default key URL.
    pub fn detail(&self, id: &str) -> SubnetDetail {
        self.subnets
            .get(id)
            .cloned()
            .unwrap_or_else(|| SubnetDetail::fallback(id, &self.default_key_url))
    }

    pub fn key_url(&self, id: &str) -> &str {
        self.key_urls
            .get(id)
            .map(|url| url.as_str())
            .unwrap_or(&self.default_key_url)
    }
}
