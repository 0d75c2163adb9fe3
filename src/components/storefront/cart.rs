//! Slide-in cart panel.
//!
//! Lists each line with a quantity stepper and remove control, the running
//! total, and checkout. An empty cart shows a call to action instead.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::render::{self, CartLineView, CartPanelView};

stylance::import_crate_style!(css, "src/components/storefront/cart.module.css");

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = ctx.ui.cart_open;
    let panel = Memo::new(move |_| ctx.cart.with(render::cart_panel));
    let total = Memo::new(move |_| ctx.cart.with(render::cart_total_label));

    let overlay_class = move || {
        if open.get() {
            format!("{} {}", css::overlay, css::overlayVisible)
        } else {
            css::overlay.to_string()
        }
    };
    let panel_class = move || {
        if open.get() {
            format!("{} {}", css::panel, css::panelOpen)
        } else {
            css::panel.to_string()
        }
    };

    view! {
        <div class=overlay_class on:click=move |_| ctx.toggle_cart()></div>

        <aside class=panel_class>
            <header class=css::header>
                <h2 class=css::heading>"Your Cart"</h2>
                <button class=css::close on:click=move |_| ctx.toggle_cart() title="Close">
                    <Icon icon=ic::CLOSE />
                </button>
            </header>

            <div class=css::items>
                {move || match panel.get() {
                    CartPanelView::Empty => view! {
                        <div class=css::empty>
                            <span class=css::emptyIcon><Icon icon=ic::CART_EMPTY /></span>
                            <p>"Your cart is empty."</p>
                            <button class=css::link on:click=move |_| ctx.toggle_cart()>
                                "Start Shopping"
                            </button>
                        </div>
                    }
                    .into_any(),
                    CartPanelView::Lines { lines, .. } => lines
                        .into_iter()
                        .map(|line| view! { <CartRow line=line /> })
                        .collect::<Vec<_>>()
                        .into_any(),
                }}
            </div>

            <footer class=css::footer>
                <div class=css::totalRow>
                    <span>"Total"</span>
                    <span class=css::total>{move || total.get()}</span>
                </div>
                <button class=css::checkout on:click=move |_| ctx.checkout()>
                    "Checkout"
                </button>
            </footer>
        </aside>
    }
}

#[component]
fn CartRow(line: CartLineView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = line.id;
    let alt = line.title.clone();

    view! {
        <div class=css::row>
            <img class=css::thumb src=line.image alt=alt />
            <div class=css::rowInfo>
                <h4 class=css::rowTitle>{line.title}</h4>
                <p class=css::rowSummary>{line.summary}</p>
            </div>
            <div class=css::rowControls>
                <button
                    class=css::remove
                    on:click=move |_| ctx.remove_from_cart(id)
                    title="Remove"
                >
                    <Icon icon=ic::TRASH />
                </button>
                <div class=css::stepper>
                    <button on:click=move |_| ctx.change_quantity(id, -1) title="Decrease">
                        <Icon icon=ic::MINUS />
                    </button>
                    <span class=css::qty>{line.quantity}</span>
                    <button on:click=move |_| ctx.change_quantity(id, 1) title="Increase">
                        <Icon icon=ic::PLUS />
                    </button>
                </div>
            </div>
        </div>
    }
}
