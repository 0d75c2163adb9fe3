//! UI components built with Leptos.
//!
//! - [`Storefront`] - Page shell (navbar, sections, overlays)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`storefront`] - Catalog, cart and modal components

pub mod icons;
pub mod storefront;

pub use storefront::Storefront;
