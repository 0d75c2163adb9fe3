use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// One product's entry in the cart.
///
/// Persisted as the flattened product fields plus `qty`, so a stored line
/// reads like an API record with a quantity attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product taken when it was first added.
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub qty: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self { product, qty: 1 }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price × quantity, unrounded.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.qty)
    }
}
