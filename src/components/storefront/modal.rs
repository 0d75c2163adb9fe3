//! Product detail modal.
//!
//! Dismissed by the close button, a click on the backdrop, or Escape
//! (handled globally in the shell).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::render::{self, ProductDetailView};

stylance::import_crate_style!(css, "src/components/storefront/modal.module.css");

#[component]
pub fn ProductModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let detail = Memo::new(move |_| {
        let id = ctx.ui.detail.get()?;
        ctx.catalog
            .with(|state| render::product_detail(state.as_ready()?, id))
    });

    move || {
        detail.get().map(|detail| {
            view! {
                <div class=css::backdrop on:click=move |_| ctx.close_detail()>
                    <div class=css::dialog on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                        <button class=css::close on:click=move |_| ctx.close_detail() title="Close">
                            <Icon icon=ic::CLOSE />
                        </button>
                        <DetailContent detail=detail />
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn DetailContent(detail: ProductDetailView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = detail.id;
    let alt = detail.title.clone();
    let add_and_close = move |_| {
        ctx.add_to_cart(id);
        ctx.close_detail();
    };

    view! {
        <div class=css::content>
            <div class=css::media>
                <img class=css::image src=detail.image alt=alt />
            </div>

            <div class=css::info>
                <div class=css::meta>
                    <span class=css::category>{detail.category}</span>
                    <span class=css::rating>
                        <Icon icon=ic::STAR />
                        {detail.rating}
                        <span class=css::reviews>{format!("({} reviews)", detail.reviews)}</span>
                    </span>
                </div>

                <h2 class=css::title>{detail.title}</h2>
                <div class=css::description>
                    <p>{detail.description}</p>
                </div>

                <div class=css::footer>
                    <span class=css::price>{detail.price}</span>
                    <div class=css::actions>
                        <button class=css::primary on:click=add_and_close>
                            <Icon icon=ic::CART_ADD />
                            "Add to Cart"
                        </button>
                        <button class=css::secondary on:click=move |_| ctx.buy_now()>
                            "Buy Now"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
