//! Home view sections: hero banner and feature tiles.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::View;

stylance::import_crate_style!(css, "src/components/storefront/home.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::hero>
            <p class=css::eyebrow>{format!("Welcome to {}", APP_NAME)}</p>
            <h1 class=css::headline>"Shop the season's favourites"</h1>
            <p class=css::tagline>{APP_TAGLINE}</p>
            <button class=css::cta on:click=move |_| ctx.navigate(View::Products)>
                "Shop Now"
            </button>
        </section>
    }
}

const FEATURES: [(IconData, &str, &str); 3] = [
    (ic::DELIVERY, "Fast Delivery", "Free shipping on every order over $50."),
    (ic::SECURE, "Secure Payment", "Checkout protected end to end."),
    (ic::RETURNS, "Easy Returns", "Changed your mind? Return within 30 days."),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class=css::features>
            {FEATURES
                .into_iter()
                .map(|(icon, title, text)| {
                    view! {
                        <div class=css::feature>
                            <span class=css::featureIcon><Icon icon=icon /></span>
                            <h3 class=css::featureTitle>{title}</h3>
                            <p class=css::featureText>{text}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
