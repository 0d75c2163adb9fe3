//! Root application module.
//!
//! Contains the main App component, AppContext definition, UiState,
//! and the user actions that mutate the stores.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Storefront;
use crate::config::{FILTER_FADE_MS, TOAST_DURATION_MS, messages};
use crate::core::actions::{self, CartOutcome, Toast};
use crate::core::error::CartError;
use crate::core::render::{self, CheckoutAction};
use crate::core::{Cart, CatalogState, storage};
use crate::models::{CategoryFilter, ProductId, View};
use crate::utils::{dom, format};

// ============================================================================
// UiState
// ============================================================================

/// Transient presentation state: overlays, toast, listing fade.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct UiState {
    /// Slide-in cart panel visibility.
    pub cart_open: RwSignal<bool>,
    /// Product shown in the detail modal.
    pub detail: RwSignal<Option<ProductId>>,
    /// Current toast notification.
    pub toast: RwSignal<Option<Toast>>,
    /// Product grid is fading after a filter change.
    pub listing_fading: RwSignal<bool>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            cart_open: RwSignal::new(false),
            detail: RwSignal::new(None),
            toast: RwSignal::new(None),
            listing_fading: RwSignal::new(false),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Catalog**: load lifecycle and the immutable product/category lists
/// - **Cart**: line items, persisted to localStorage after every mutation
/// - **Filter / View**: active category and visible top-level page
/// - **UI**: overlays and notifications
#[derive(Clone, Copy)]
pub struct AppContext {
    pub catalog: RwSignal<CatalogState>,
    pub cart: RwSignal<Cart>,
    pub filter: RwSignal<CategoryFilter>,
    pub view: RwSignal<View>,
    pub ui: UiState,
}

impl AppContext {
    /// Creates the context, restoring the cart from localStorage.
    ///
    /// The catalog starts in `Loading`; see the boot sequence.
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(CatalogState::Loading),
            cart: RwSignal::new(storage::load_cart()),
            filter: RwSignal::new(CategoryFilter::All),
            view: RwSignal::new(View::default()),
            ui: UiState::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Show `target`'s sections, hide the rest, and scroll to the top.
    pub fn navigate(&self, target: View) {
        dom::scroll_to_top();
        self.view.set(target);
    }

    /// Select a category and fade the grid while it re-renders.
    pub fn set_filter(&self, filter: CategoryFilter) {
        self.filter.set(filter);
        let fading = self.ui.listing_fading;
        fading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(FILTER_FADE_MS).await;
            fading.set(false);
        });
    }

    // ------------------------------------------------------------------------
    // Cart actions
    // ------------------------------------------------------------------------

    pub fn add_to_cart(&self, id: ProductId) {
        let panel_open = self.ui.cart_open.get_untracked();
        let outcome = self.catalog.with_untracked(|state| {
            self.cart
                .try_update(|cart| actions::add_to_cart(cart, state.as_ready(), id, panel_open))
        });
        self.apply(outcome.unwrap_or_default());
    }

    pub fn remove_from_cart(&self, id: ProductId) {
        let outcome = self.cart.try_update(|cart| actions::remove_from_cart(cart, id));
        self.apply(outcome.unwrap_or_default());
    }

    pub fn change_quantity(&self, id: ProductId, delta: i32) {
        let outcome = self
            .cart
            .try_update(|cart| actions::change_quantity(cart, id, delta));
        self.apply(outcome.unwrap_or_default());
    }

    /// Run the side effects a cart action asked for.
    fn apply(&self, outcome: CartOutcome) {
        if let Some(err) = outcome.ignored {
            warn_ignored(err);
        }
        if outcome.persist {
            self.persist_cart();
        }
        if let Some(message) = outcome.toast {
            self.notify(message);
        }
        if outcome.open_panel {
            self.ui.cart_open.set(true);
        }
    }

    fn persist_cart(&self) {
        if let Err(e) = self.cart.with_untracked(storage::save_cart) {
            web_sys::console::warn_1(&format!("Failed to save cart: {}", e).into());
        }
    }

    /// Acknowledge the order total, or explain that the cart is empty.
    pub fn checkout(&self) {
        match self.cart.with_untracked(render::checkout) {
            CheckoutAction::Notify(message) => self.notify(message),
            CheckoutAction::Confirm { total } => dom::alert(&format::checkout_message(&total)),
        }
    }

    /// "Buy Now" placeholder.
    pub fn buy_now(&self) {
        self.notify(messages::COMING_SOON);
    }

    // ------------------------------------------------------------------------
    // Overlays and notifications
    // ------------------------------------------------------------------------

    pub fn toggle_cart(&self) {
        self.ui.cart_open.update(|open| *open = !*open);
    }

    /// Open the detail modal for a product in the catalog.
    pub fn open_detail(&self, id: ProductId) {
        let known = self
            .catalog
            .with_untracked(|state| state.as_ready().is_some_and(|c| c.find(id).is_some()));
        if known {
            self.ui.detail.set(Some(id));
        }
    }

    pub fn close_detail(&self) {
        self.ui.detail.set(None);
    }

    /// Escape key: close the modal and, if open, the cart panel.
    pub fn dismiss_overlays(&self) {
        self.close_detail();
        if self.ui.cart_open.get_untracked() {
            self.ui.cart_open.set(false);
        }
    }

    /// Show a toast for `TOAST_DURATION_MS`. A newer toast replaces this one.
    pub fn notify(&self, message: impl Into<String>) {
        let toast = self.ui.toast;
        let next = toast.with_untracked(|current| Toast::next(current.as_ref(), message));
        let seq = next.seq;
        toast.set(Some(next));

        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            if toast.with_untracked(|current| Toast::expires(current.as_ref(), seq)) {
                toast.set(None);
            }
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart actions on unknown ids are tolerated; leave a trace in the console.
fn warn_ignored(err: CartError) {
    web_sys::console::warn_1(&format!("Ignored cart action: {}", err).into());
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Storefront component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f9fafb;
                    color: #111827;
                    font-family: 'Inter', system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #dc2626;
                            font-size: 0.9rem;
                            margin-bottom: 1rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #4f46e5;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 0.75rem;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Storefront />
        </ErrorBoundary>
    }
}
