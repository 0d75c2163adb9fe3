//! Formatting utilities for user-facing text.

use crate::config::TOAST_TITLE_LEN;

/// The first `max_chars` characters of `title` (the whole title if shorter).
///
/// Counts characters, not bytes, so multi-byte titles never split.
pub fn title_prefix(title: &str, max_chars: usize) -> &str {
    match title.char_indices().nth(max_chars) {
        Some((idx, _)) => &title[..idx],
        None => title,
    }
}

/// Toast text confirming an add-to-cart. The ellipsis is always present.
pub fn added_to_cart_message(title: &str) -> String {
    format!("Added {}... to cart!", title_prefix(title, TOAST_TITLE_LEN))
}

/// Text of the checkout acknowledgement.
pub fn checkout_message(total: &str) -> String {
    format!("Proceeding to checkout with Total: {}", total)
}
