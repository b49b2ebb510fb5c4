use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use mediashop_core::CustomerId;
use mediashop_customers::Customer;
use mediashop_products::{Membership, Product};

/// Order as submitted to checkout (JSON).
///
/// ```json
/// {
///   "customer_id": "0190c1b2-7d2e-7c4a-9f00-000000000001",
///   "memberships": ["video"],
///   "line_items": [
///     { "physical": { "kind": "book", "title": "A Brief History of Time" } },
///     { "membership": "premium" }
///   ]
/// }
/// ```
///
/// `customer_id` defaults to a fresh id, `memberships` (already active on the
/// account) to none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderDocument {
    #[serde(default)]
    pub customer_id: CustomerId,
    #[serde(default)]
    pub memberships: Vec<Membership>,
    pub line_items: Vec<Product>,
}

impl OrderDocument {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read order file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid order file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn customer(&self) -> Customer {
        Customer::with_memberships(self.customer_id, self.memberships.clone())
    }
}
