use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/storefront/toast.module.css");

/// Bottom-centre notification; hidden again by `AppContext::notify`'s timer.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toast = ctx.ui.toast;

    view! {
        <div
            class=move || {
                if toast.with(Option::is_some) {
                    format!("{} {}", css::toast, css::show)
                } else {
                    css::toast.to_string()
                }
            }
            role="status"
        >
            {move || toast.with(|t| t.as_ref().map(|t| t.message.clone()).unwrap_or_default())}
        </div>
    }
}
