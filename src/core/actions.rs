//! Decisions behind the user's cart actions and toasts.
//!
//! Each action mutates the cart and returns a [`CartOutcome`] naming the
//! side effects to run. `AppContext` applies them to its signals, the
//! browser storage and the console.

use crate::core::cart::Cart;
use crate::core::catalog::Catalog;
use crate::core::error::CartError;
use crate::models::ProductId;
use crate::utils::format;

/// Side effects requested by a cart action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartOutcome {
    /// The cart changed and must be written back whole.
    pub persist: bool,
    /// Toast text to show.
    pub toast: Option<String>,
    /// Open the cart panel (only ever requested while it is closed).
    pub open_panel: bool,
    /// A tolerated failure; logged, nothing else happens.
    pub ignored: Option<CartError>,
}

impl CartOutcome {
    fn persist() -> Self {
        Self {
            persist: true,
            ..Self::default()
        }
    }

    fn ignore(err: CartError) -> Self {
        Self {
            ignored: Some(err),
            ..Self::default()
        }
    }
}

/// Add one unit of `id`. `catalog` is `None` until the catalog has loaded.
pub fn add_to_cart(
    cart: &mut Cart,
    catalog: Option<&Catalog>,
    id: ProductId,
    panel_open: bool,
) -> CartOutcome {
    let Some(catalog) = catalog else {
        return CartOutcome::ignore(CartError::ProductNotFound(id));
    };

    match cart.add(catalog, id) {
        Ok(line) => CartOutcome {
            persist: true,
            toast: Some(format::added_to_cart_message(&line.product.title)),
            open_panel: !panel_open,
            ignored: None,
        },
        Err(e) => CartOutcome::ignore(e),
    }
}

/// Drop the line for `id`. Persists only when a line was actually removed.
pub fn remove_from_cart(cart: &mut Cart, id: ProductId) -> CartOutcome {
    if cart.remove(id) {
        CartOutcome::persist()
    } else {
        CartOutcome::default()
    }
}

pub fn change_quantity(cart: &mut Cart, id: ProductId, delta: i32) -> CartOutcome {
    match cart.change_quantity(id, delta) {
        Ok(_) => CartOutcome::persist(),
        Err(e) => CartOutcome::ignore(e),
    }
}

/// A visible toast. `seq` tells a stale hide timer apart from the current toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub seq: u64,
    pub message: String,
}

impl Toast {
    /// The toast replacing `current`.
    pub fn next(current: Option<&Toast>, message: impl Into<String>) -> Toast {
        Toast {
            seq: current.map_or(0, |t| t.seq.wrapping_add(1)),
            message: message.into(),
        }
    }

    /// Whether the hide timer started for toast `seq` may clear `current`.
    pub fn expires(current: Option<&Toast>, seq: u64) -> bool {
        current.is_some_and(|t| t.seq == seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::fixtures::product;

    const A: ProductId = 1;
    const B: ProductId = 2;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![product(A, "x", 4.5, 10.0), product(B, "y", 3.9, 5.5)],
            vec!["x".to_string(), "y".to_string()],
        )
    }

    #[test]
    fn test_add_persists_notifies_and_opens_closed_panel() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let outcome = add_to_cart(&mut cart, Some(&catalog), A, false);
        assert_eq!(
            outcome,
            CartOutcome {
                persist: true,
                toast: Some("Added Product 1... to cart!".to_string()),
                open_panel: true,
                ignored: None,
            }
        );
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_leaves_open_panel_alone() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let outcome = add_to_cart(&mut cart, Some(&catalog), B, true);
        assert!(outcome.persist);
        assert!(outcome.toast.is_some());
        assert!(!outcome.open_panel);
    }

    #[test]
    fn test_add_unknown_id_is_ignored() {
        let catalog = catalog();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, Some(&catalog), A, false);
        let before = cart.clone();

        let outcome = add_to_cart(&mut cart, Some(&catalog), 99, false);
        assert_eq!(
            outcome,
            CartOutcome {
                ignored: Some(CartError::ProductNotFound(99)),
                ..CartOutcome::default()
            }
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_before_catalog_loads_is_ignored() {
        let mut cart = Cart::new();

        let outcome = add_to_cart(&mut cart, None, A, false);
        assert!(!outcome.persist);
        assert_eq!(outcome.toast, None);
        assert_eq!(outcome.ignored, Some(CartError::ProductNotFound(A)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_every_mutation_persists() {
        let catalog = catalog();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, Some(&catalog), A, false);
        add_to_cart(&mut cart, Some(&catalog), B, true);

        assert_eq!(change_quantity(&mut cart, A, 1), CartOutcome::persist());
        assert_eq!(change_quantity(&mut cart, A, -2), CartOutcome::persist());
        assert_eq!(remove_from_cart(&mut cart, B), CartOutcome::persist());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_unknown_line_is_ignored() {
        let mut cart = Cart::new();

        let outcome = change_quantity(&mut cart, A, 1);
        assert!(!outcome.persist);
        assert_eq!(outcome.toast, None);
        assert_eq!(outcome.ignored, Some(CartError::LineNotFound(A)));
    }

    #[test]
    fn test_remove_missing_line_does_nothing() {
        let mut cart = Cart::new();
        assert_eq!(remove_from_cart(&mut cart, A), CartOutcome::default());
    }

    #[test]
    fn test_newer_toast_outlives_older_timer() {
        let first = Toast::next(None, "first");
        assert_eq!(first.seq, 0);
        assert!(Toast::expires(Some(&first), first.seq));

        let second = Toast::next(Some(&first), "second");
        assert_ne!(second.seq, first.seq);
        assert!(!Toast::expires(Some(&second), first.seq));
        assert!(Toast::expires(Some(&second), second.seq));
    }

    #[test]
    fn test_hidden_toast_does_not_expire_again() {
        assert!(!Toast::expires(None, 0));
    }
}
