//! Read-only view of the host-owned cart.
//!
//! The host platform owns and mutates the cart; this crate only reads a
//! snapshot of its line items taken for the current request.

use serde::{Deserialize, Serialize};

use crate::product::ProductId;

/// One entry in the cart: a product and the quantity currently held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Snapshot of the cart contents at validation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartSnapshot {
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

impl CartSnapshot {
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Total quantity of `product` across all cart lines (linear scan).
    pub fn sum_quantity_for(&self, product: ProductId) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.product_id == product)
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }
}
