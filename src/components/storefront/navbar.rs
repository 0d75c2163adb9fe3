//! Top navigation bar with the cart toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::render;
use crate::models::View;

stylance::import_crate_style!(css, "src/components/storefront/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let badge = Memo::new(move |_| ctx.cart.with(render::cart_badge));

    let link_class = move |target: View| {
        if ctx.view.get() == target {
            format!("{} {}", css::link, css::linkActive)
        } else {
            css::link.to_string()
        }
    };

    view! {
        <nav class=css::navbar>
            <button class=css::brand on:click=move |_| ctx.navigate(View::Home)>
                <Icon icon=ic::BAG />
                <span>{APP_NAME}</span>
            </button>

            <div class=css::links>
                <button class=move || link_class(View::Home) on:click=move |_| ctx.navigate(View::Home)>
                    "Home"
                </button>
                <button
                    class=move || link_class(View::Products)
                    on:click=move |_| ctx.navigate(View::Products)
                >
                    "Products"
                </button>
            </div>

            <button class=css::cartButton on:click=move |_| ctx.toggle_cart() title="Cart">
                <Icon icon=ic::CART />
                <span class=move || {
                    if badge.get().visible {
                        format!("{} {}", css::badge, css::badgeVisible)
                    } else {
                        css::badge.to_string()
                    }
                }>
                    {move || badge.get().count}
                </span>
            </button>
        </nav>
    }
}
