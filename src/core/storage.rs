//! Cart persistence using localStorage.
//!
//! The cart lives in a single key and is always written whole; there are
//! no partial or merge writes.

use crate::config::CART_STORAGE_KEY;
use crate::core::cart::Cart;
use crate::core::error::StorageError;
use crate::utils::dom;

/// Build a cart from the raw slot contents.
///
/// An absent slot is an empty cart; malformed contents are an error.
pub fn parse_cart(raw: Option<&str>) -> Result<Cart, serde_json::Error> {
    match raw {
        Some(json) => Cart::from_json(json),
        None => Ok(Cart::new()),
    }
}

/// Read the persisted cart. Called once at startup.
pub fn load_cart() -> Cart {
    let raw = dom::local_storage().and_then(|storage| storage.get_item(CART_STORAGE_KEY).ok()?);

    parse_cart(raw.as_deref()).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Discarding malformed saved cart: {}", e).into());
        Cart::new()
    })
}

/// Overwrite the persisted cart.
pub fn save_cart(cart: &Cart) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    let json = cart
        .to_json()
        .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    storage
        .set_item(CART_STORAGE_KEY, &json)
        .map_err(|_| StorageError::SaveFailed)
}
