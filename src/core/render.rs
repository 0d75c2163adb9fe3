//! View renderer: pure view descriptions for the storefront.
//!
//! Each function takes the stores (and the active filter) and returns plain
//! data describing what to show. Components in `crate::components` paint
//! these descriptions and bind event handlers to the typed values they
//! carry (product ids, [`CategoryFilter`]s), so no label is ever spliced
//! into an event binding.

use crate::config::messages;
use crate::core::cart::Cart;
use crate::core::catalog::{Catalog, CatalogState};
use crate::models::{CartLine, CategoryFilter, Product, ProductId};

// =============================================================================
// Category Filter Bar
// =============================================================================

/// One control in the category filter bar.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterButtonView {
    pub filter: CategoryFilter,
    pub label: String,
    pub active: bool,
}

/// "All" followed by one control per category; exactly one is active.
///
/// If `active` names a category that is not in the list, "All" is marked.
pub fn category_bar(categories: &[String], active: &CategoryFilter) -> Vec<FilterButtonView> {
    let active_known = match active {
        CategoryFilter::All => false,
        CategoryFilter::Category(label) => categories.contains(label),
    };

    std::iter::once(CategoryFilter::All)
        .chain(categories.iter().map(|c| CategoryFilter::Category(c.clone())))
        .map(|filter| {
            let is_active = if active_known {
                &filter == active
            } else {
                filter == CategoryFilter::All
            };
            FilterButtonView {
                label: filter.label().to_string(),
                filter,
                active: is_active,
            }
        })
        .collect()
}

// =============================================================================
// Product Cards and Listing
// =============================================================================

/// Card shown in the product grid and the trending strip.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub price: String,
    pub rating: String,
    pub reviews: u32,
    /// Trending badge.
    pub hot: bool,
}

impl ProductCardView {
    fn new(product: &Product, hot: bool) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.unit_price().to_string(),
            rating: product.rating_label(),
            reviews: product.rating.count,
            hot,
        }
    }
}

/// What occupies the product grid area.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingView {
    Loading,
    /// The catalog failed to load; replaces the grid entirely.
    Failed { message: String },
    /// The active filter matches nothing.
    Empty { message: String },
    Grid(Vec<ProductCardView>),
}

pub fn product_listing(state: &CatalogState, filter: &CategoryFilter) -> ListingView {
    match state {
        CatalogState::Loading => ListingView::Loading,
        CatalogState::Failed(_) => ListingView::Failed {
            message: messages::LOAD_FAILED.to_string(),
        },
        CatalogState::Ready(catalog) => {
            let cards: Vec<_> = catalog
                .filtered(filter)
                .into_iter()
                .map(|p| ProductCardView::new(p, false))
                .collect();
            if cards.is_empty() {
                ListingView::Empty {
                    message: messages::NO_PRODUCTS.to_string(),
                }
            } else {
                ListingView::Grid(cards)
            }
        }
    }
}

/// Top-`n` rated products, each marked hot. Empty until the catalog loads.
pub fn trending_strip(state: &CatalogState, n: usize) -> Vec<ProductCardView> {
    state
        .as_ready()
        .map(|catalog| {
            catalog
                .trending(n)
                .into_iter()
                .map(|p| ProductCardView::new(p, true))
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Product Detail
// =============================================================================

/// Contents of the product detail modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetailView {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: String,
    pub rating: String,
    pub reviews: u32,
}

pub fn product_detail(catalog: &Catalog, id: ProductId) -> Option<ProductDetailView> {
    catalog.find(id).map(|p| ProductDetailView {
        id: p.id,
        title: p.title.clone(),
        category: p.category.clone(),
        image: p.image.clone(),
        description: p.description.clone(),
        price: p.unit_price().to_string(),
        rating: p.rating_label(),
        reviews: p.rating.count,
    })
}

// =============================================================================
// Cart Panel
// =============================================================================

/// One row of the cart panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    /// "$unit x qty"
    pub summary: String,
    pub quantity: u32,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id(),
            title: line.product.title.clone(),
            image: line.product.image.clone(),
            summary: format!("{} x {}", line.product.unit_price(), line.qty),
            quantity: line.qty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartPanelView {
    /// Empty-cart state with a "Start Shopping" call to action.
    Empty,
    Lines {
        lines: Vec<CartLineView>,
        total: String,
    },
}

pub fn cart_panel(cart: &Cart) -> CartPanelView {
    if cart.is_empty() {
        return CartPanelView::Empty;
    }
    CartPanelView::Lines {
        lines: cart.lines().iter().map(CartLineView::from).collect(),
        total: cart_total_label(cart),
    }
}

/// Running total, `$0.00` for an empty cart.
pub fn cart_total_label(cart: &Cart) -> String {
    cart.total().to_string()
}

/// Navbar cart badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartBadgeView {
    pub count: u32,
    pub visible: bool,
}

pub fn cart_badge(cart: &Cart) -> CartBadgeView {
    let count = cart.item_count();
    CartBadgeView {
        count,
        visible: count > 0,
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Outcome of pressing "Checkout".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutAction {
    /// Nothing to buy; show this toast instead.
    Notify(String),
    /// Acknowledge the order total.
    Confirm { total: String },
}

pub fn checkout(cart: &Cart) -> CheckoutAction {
    if cart.is_empty() {
        CheckoutAction::Notify(messages::CART_EMPTY.to_string())
    } else {
        CheckoutAction::Confirm {
            total: cart_total_label(cart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::fixtures::product;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                product(1, "x", 4.5, 10.0),
                product(2, "men's clothing", 4.9, 22.3),
                product(3, "x", 3.0, 7.5),
            ],
            vec!["x".to_string(), "men's clothing".to_string()],
        )
    }

    fn ready() -> CatalogState {
        CatalogState::Ready(catalog())
    }

    fn card_ids(listing: &ListingView) -> Vec<ProductId> {
        match listing {
            ListingView::Grid(cards) => cards.iter().map(|c| c.id).collect(),
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn test_category_bar_marks_exactly_one_active() {
        let categories = catalog().categories().to_vec();

        for active in [
            CategoryFilter::All,
            CategoryFilter::from("x"),
            CategoryFilter::from("men's clothing"),
        ] {
            let bar = category_bar(&categories, &active);
            assert_eq!(bar.len(), 3);
            let marked: Vec<_> = bar.iter().filter(|b| b.active).collect();
            assert_eq!(marked.len(), 1);
            assert_eq!(marked[0].filter, active);
        }
    }

    #[test]
    fn test_category_bar_labels_and_filters() {
        let categories = catalog().categories().to_vec();
        let bar = category_bar(&categories, &CategoryFilter::All);

        assert_eq!(bar[0].label, "All");
        assert_eq!(bar[0].filter, CategoryFilter::All);
        assert_eq!(bar[2].label, "men's clothing");
        assert_eq!(
            bar[2].filter,
            CategoryFilter::Category("men's clothing".to_string())
        );
    }

    #[test]
    fn test_category_bar_unknown_active_falls_back_to_all() {
        let categories = catalog().categories().to_vec();
        let bar = category_bar(&categories, &CategoryFilter::from("gone"));
        assert!(bar[0].active);
        assert_eq!(bar.iter().filter(|b| b.active).count(), 1);
    }

    #[test]
    fn test_listing_grid_follows_filter() {
        let state = ready();
        assert_eq!(
            card_ids(&product_listing(&state, &CategoryFilter::All)),
            vec![1, 2, 3]
        );
        assert_eq!(card_ids(&product_listing(&state, &"x".into())), vec![1, 3]);
        assert_eq!(
            card_ids(&product_listing(&state, &"men's clothing".into())),
            vec![2]
        );
    }

    #[test]
    fn test_listing_empty_state() {
        let listing = product_listing(&ready(), &"electronics".into());
        assert_eq!(
            listing,
            ListingView::Empty {
                message: "No products found in this category.".to_string()
            }
        );
    }

    #[test]
    fn test_listing_loading_and_failed() {
        assert_eq!(
            product_listing(&CatalogState::Loading, &CategoryFilter::All),
            ListingView::Loading
        );
        assert_eq!(
            product_listing(
                &CatalogState::Failed("HTTP error: 500".into()),
                &CategoryFilter::All
            ),
            ListingView::Failed {
                message: "Failed to load products. Please try again later.".to_string()
            }
        );
    }

    #[test]
    fn test_card_fields() {
        let ListingView::Grid(cards) = product_listing(&ready(), &"men's clothing".into()) else {
            panic!("expected grid");
        };
        let card = &cards[0];
        assert_eq!(card.price, "$22.30");
        assert_eq!(card.rating, "4.9");
        assert_eq!(card.reviews, 10);
        assert!(!card.hot);
    }

    #[test]
    fn test_trending_strip_is_hot_and_ranked() {
        let strip = trending_strip(&ready(), 2);
        assert_eq!(strip.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 1]);
        assert!(strip.iter().all(|c| c.hot));

        assert!(trending_strip(&CatalogState::Loading, 3).is_empty());
    }

    #[test]
    fn test_product_detail() {
        let detail = product_detail(&catalog(), 3).unwrap();
        assert_eq!(detail.title, "Product 3");
        assert_eq!(detail.description, "Description of product 3");
        assert_eq!(detail.price, "$7.50");
        assert_eq!(detail.rating, "3");
        assert!(product_detail(&catalog(), 42).is_none());
    }

    #[test]
    fn test_empty_cart_views() {
        let cart = Cart::new();
        assert_eq!(cart_panel(&cart), CartPanelView::Empty);
        assert_eq!(cart_total_label(&cart), "$0.00");
        assert_eq!(
            cart_badge(&cart),
            CartBadgeView {
                count: 0,
                visible: false
            }
        );
        assert_eq!(
            checkout(&cart),
            CheckoutAction::Notify("Cart is empty!".to_string())
        );
    }

    #[test]
    fn test_cart_panel_lines() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, 2).unwrap();
        cart.add(&catalog, 2).unwrap();
        cart.add(&catalog, 1).unwrap();

        let CartPanelView::Lines { lines, total } = cart_panel(&cart) else {
            panic!("expected lines");
        };
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].id, 2);
        assert_eq!(lines[0].summary, "$22.30 x 2");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(total, "$54.60");

        assert_eq!(
            cart_badge(&cart),
            CartBadgeView {
                count: 3,
                visible: true
            }
        );
        assert_eq!(
            checkout(&cart),
            CheckoutAction::Confirm {
                total: "$54.60".to_string()
            }
        );
    }
}
