use leptos::prelude::*;
use leptos_icons::Icon;

use super::card::ProductCard;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TRENDING_COUNT;
use crate::core::render;

stylance::import_crate_style!(css, "src/components/storefront/trending.module.css");

/// Top-rated products on the home view.
#[component]
pub fn Trending() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let cards = Memo::new(move |_| {
        ctx.catalog
            .with(|state| render::trending_strip(state, TRENDING_COUNT))
    });

    view! {
        <section class=css::section>
            <header class=css::sectionHeader>
                <h2 class=css::sectionTitle>
                    <Icon icon=ic::HOT />
                    "Trending Now"
                </h2>
            </header>
            <div class=css::grid>
                <For
                    each=move || cards.get()
                    key=|card| card.id
                    children=move |card| view! { <ProductCard card=card /> }
                />
            </div>
        </section>
    }
}
