//! Core business logic for the storefront.
//!
//! This module provides:
//! - outcomes of the user's cart actions and toast sequencing ([`actions`])
//! - [`catalog::Catalog`] loading and derived listings ([`catalog`])
//! - [`Cart`] line-item state and totals ([`cart`])
//! - cart persistence in localStorage ([`storage`])
//! - pure view descriptions for the components ([`render`])

pub mod actions;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod render;
pub mod storage;

pub use cart::Cart;
pub use catalog::CatalogState;
