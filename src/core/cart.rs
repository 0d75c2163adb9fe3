//! Cart store: ordered line items with per-product quantities.
//!
//! Invariants held by every operation:
//! - at most one [`CartLine`] per product id
//! - every quantity is at least 1 (a change that would reach 0 removes the line)
//! - lines keep insertion order
//!
//! The cart is a plain value. Persisting it and notifying the user are the
//! caller's job (see `AppContext`), so everything here is testable natively.

use serde::{Deserialize, Serialize};

use crate::core::catalog::Catalog;
use crate::core::error::CartError;
use crate::models::{CartLine, Money, ProductId};

/// Result of [`Cart::change_quantity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now holds this quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
}

/// The shopping cart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted JSON array of lines.
    ///
    /// Lines with a zero quantity are dropped and duplicate ids are merged,
    /// so a hand-edited slot still yields a valid cart.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let lines: Vec<CartLine> = serde_json::from_str(json)?;
        let mut cart = Self::new();
        for line in lines.into_iter().filter(|l| l.qty > 0) {
            match cart.line_mut(line.id()) {
                Some(existing) => existing.qty = existing.qty.saturating_add(line.qty),
                None => cart.lines.push(line),
            }
        }
        Ok(cart)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[cfg(test)]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.id() == id)
    }

    #[cfg(test)]
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a catalog product.
    ///
    /// Increments the existing line, or appends a new line holding a
    /// snapshot of the product. Returns the affected line.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId) -> Result<&CartLine, CartError> {
        let product = catalog.find(id).ok_or(CartError::ProductNotFound(id))?;

        let index = match self.lines.iter().position(|l| l.id() == id) {
            Some(index) => {
                self.lines[index].qty += 1;
                index
            }
            None => {
                self.lines.push(CartLine::new(product.clone()));
                self.lines.len() - 1
            }
        };
        Ok(&self.lines[index])
    }

    /// Remove a line. Returns `false` if the product was not in the cart.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id() != id);
        self.lines.len() != before
    }

    /// Adjust a line's quantity by `delta`, removing it at zero or below.
    pub fn change_quantity(
        &mut self,
        id: ProductId,
        delta: i32,
    ) -> Result<QuantityChange, CartError> {
        let line = self.line_mut(id).ok_or(CartError::LineNotFound(id))?;
        let new_qty = i64::from(line.qty) + i64::from(delta);

        if new_qty <= 0 {
            self.remove(id);
            return Ok(QuantityChange::Removed);
        }

        line.qty = u32::try_from(new_qty).unwrap_or(u32::MAX);
        Ok(QuantityChange::Updated(line.qty))
    }

    /// Sum of price × quantity over all lines, rounded to cents once.
    pub fn total(&self) -> Money {
        Money::from_price(self.lines.iter().map(CartLine::line_total).sum())
    }

    /// Sum of quantities (badge count), not the number of lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.qty).sum()
    }
}
