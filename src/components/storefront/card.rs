//! Product card used by the grid and the trending strip.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::render::ProductCardView;

stylance::import_crate_style!(css, "src/components/storefront/card.module.css");

#[component]
pub fn ProductCard(card: ProductCardView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = card.id;
    let alt = card.title.clone();
    let open = move |_: leptos::ev::MouseEvent| ctx.open_detail(id);

    view! {
        <article class=css::card>
            <div class=css::media on:click=open>
                <img class=css::image src=card.image alt=alt />
                {card.hot.then(|| view! {
                    <span class=css::hot><Icon icon=ic::HOT />"Hot"</span>
                })}
            </div>

            <div class=css::body>
                <div class=css::meta>
                    <span class=css::category>{card.category}</span>
                    <span class=css::rating>
                        <Icon icon=ic::STAR />
                        {card.rating}
                        <span class=css::reviews>{format!("({})", card.reviews)}</span>
                    </span>
                </div>

                <h3 class=css::title on:click=open>{card.title}</h3>
                <div class=css::price>{card.price}</div>

                <div class=css::actions>
                    <button class=css::secondary on:click=open>
                        <Icon icon=ic::EYE />
                        "Details"
                    </button>
                    <button class=css::primary on:click=move |_| ctx.add_to_cart(id)>
                        <Icon icon=ic::CART_ADD />
                        "Add"
                    </button>
                </div>
            </div>
        </article>
    }
}
