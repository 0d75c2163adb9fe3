//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Store name displayed in the navbar and hero.
pub const APP_NAME: &str = "SwiftCart";

/// Tagline shown under the hero headline.
pub const APP_TAGLINE: &str = "Everyday essentials and standout finds, delivered fast.";

// =============================================================================
// Catalog API
// =============================================================================

/// Endpoint returning the full product array.
pub const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// Endpoint returning the category label array.
pub const CATEGORIES_URL: &str = "https://fakestoreapi.com/products/categories";

/// Number of products shown in the trending strip.
pub const TRENDING_COUNT: usize = 3;

// =============================================================================
// Cart Persistence
// =============================================================================

/// localStorage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "swiftCart_cart";

// =============================================================================
// UI Timing and Display
// =============================================================================

/// How long a toast notification stays visible (milliseconds).
pub const TOAST_DURATION_MS: u32 = 3000;

/// Fade duration applied to the product grid when the filter changes (milliseconds).
pub const FILTER_FADE_MS: u32 = 200;

/// Maximum characters of a product title quoted in the "added" toast.
pub const TOAST_TITLE_LEN: usize = 20;

/// User-facing messages.
pub mod messages {
    /// Shown in place of the product grid when the catalog fails to load.
    pub const LOAD_FAILED: &str = "Failed to load products. Please try again later.";
    /// Shown when the active filter matches no products.
    pub const NO_PRODUCTS: &str = "No products found in this category.";
    /// Toast for checkout with an empty cart.
    pub const CART_EMPTY: &str = "Cart is empty!";
    /// Toast for the "Buy Now" placeholder.
    pub const COMING_SOON: &str = "Feature coming soon!";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
