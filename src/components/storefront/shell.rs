//! Main storefront shell.
//!
//! Lays out the navbar, the sections of the active view, and the overlays
//! (cart panel, detail modal, toast). Starts the boot sequence on mount.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use super::boot;
use super::cart::CartPanel;
use super::home::{Features, Hero};
use super::modal::ProductModal;
use super::navbar::Navbar;
use super::products::ProductsSection;
use super::toast::ToastHost;
use super::trending::Trending;
use crate::app::AppContext;
use crate::models::Section;

stylance::import_crate_style!(css, "src/components/storefront/shell.module.css");

/// Escape closes the detail modal and an open cart panel.
#[cfg(target_arch = "wasm32")]
fn setup_escape_listener(ctx: AppContext) {
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.dismiss_overlays();
        }
    }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn setup_escape_listener(_ctx: AppContext) {}

/// Storefront page component.
#[component]
pub fn Storefront() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    setup_escape_listener(ctx);
    boot::run(ctx);

    let shows = move |section: Section| ctx.view.get().shows(section);

    view! {
        <div class=css::page>
            <Navbar />

            <main class=css::main>
                <Show when=move || shows(Section::Hero)>
                    <Hero />
                </Show>
                <Show when=move || shows(Section::Features)>
                    <Features />
                </Show>
                <Show when=move || shows(Section::Trending)>
                    <Trending />
                </Show>
                <Show when=move || shows(Section::Products)>
                    <ProductsSection />
                </Show>
            </main>

            <footer class=css::footer>
                {format!("© {}", crate::config::APP_NAME)}
            </footer>

            <CartPanel />
            <ProductModal />
            <ToastHost />
        </div>
    }
}
