//! Startup sequence.
//!
//! Loads the catalog, then shows the home view. On failure the error is
//! logged and the listing renders the load-failed message; nothing else
//! changes.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::{CatalogState, catalog};
use crate::models::View;

/// Run the boot sequence.
///
/// The cart was already restored when the context was created, so the cart
/// panel is usable while the catalog is still in flight.
pub fn run(ctx: AppContext) {
    spawn_local(async move {
        match catalog::load().await {
            Ok(loaded) => {
                ctx.catalog.set(CatalogState::Ready(loaded));
                ctx.navigate(View::Home);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch catalog: {}", e).into());
                ctx.catalog.set(CatalogState::Failed(e.to_string()));
            }
        }
    });
}
