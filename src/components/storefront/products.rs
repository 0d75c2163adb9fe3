//! Products view: category filter bar and the product grid.
//!
//! The grid area shows one of four states: loading, the load-failed
//! message, the empty-category message, or the cards themselves.

use leptos::prelude::*;

use super::card::ProductCard;
use crate::app::AppContext;
use crate::core::render::{self, FilterButtonView, ListingView};

stylance::import_crate_style!(css, "src/components/storefront/products.module.css");

#[component]
pub fn ProductsSection() -> impl IntoView {
    view! {
        <section class=css::section>
            <header class=css::sectionHeader>
                <h2 class=css::sectionTitle>"All Products"</h2>
            </header>
            <CategoryBar />
            <ProductGrid />
        </section>
    }
}

#[component]
fn CategoryBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let buttons = Memo::new(move |_| {
        let active = ctx.filter.get();
        ctx.catalog.with(|state| {
            let categories = state.as_ready().map(|c| c.categories()).unwrap_or_default();
            render::category_bar(categories, &active)
        })
    });

    view! {
        <div class=css::filters>
            {move || {
                buttons
                    .get()
                    .into_iter()
                    .map(|button| view! { <FilterButton button=button /> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn FilterButton(button: FilterButtonView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let class = if button.active {
        format!("{} {}", css::filter, css::filterActive)
    } else {
        css::filter.to_string()
    };
    let filter = button.filter;

    view! {
        <button class=class on:click=move |_| ctx.set_filter(filter.clone())>
            {button.label}
        </button>
    }
}

#[component]
fn ProductGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let listing = Memo::new(move |_| {
        let filter = ctx.filter.get();
        ctx.catalog
            .with(|state| render::product_listing(state, &filter))
    });

    let grid_class = move || {
        if ctx.ui.listing_fading.get() {
            format!("{} {}", css::grid, css::faded)
        } else {
            css::grid.to_string()
        }
    };

    move || match listing.get() {
        ListingView::Loading => view! {
            <div class=css::status>"Loading products..."</div>
        }
        .into_any(),
        ListingView::Failed { message } => view! {
            <p class=css::error>{message}</p>
        }
        .into_any(),
        ListingView::Empty { message } => view! {
            <div class=css::status>{message}</div>
        }
        .into_any(),
        ListingView::Grid(cards) => view! {
            <div class=grid_class>
                {cards
                    .into_iter()
                    .map(|card| view! { <ProductCard card=card /> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}
