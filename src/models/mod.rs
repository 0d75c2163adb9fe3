//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Product`], [`ProductId`] - Catalog records from the API
//! - [`CartLine`] - A product snapshot with its cart quantity
//! - [`Money`] - Integer-cent amounts for prices and totals
//! - [`CategoryFilter`] - Active listing filter
//! - [`View`], [`Section`] - Top-level navigation state

mod cart;
mod filter;
mod money;
mod product;
mod view;

pub use cart::CartLine;
pub use filter::CategoryFilter;
pub use money::Money;
pub use product::{Product, ProductId};
#[cfg(test)]
pub use product::Rating;
pub use view::{Section, View};
