//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert_modal::AlertModal;
use crate::components::cart_badge::CartBadge;
use crate::pages::{
    cart::CartPage, checkout::CheckoutPage, login::LoginPage, marketplace::MarketplacePage,
};
use crate::state::{cart::CartState, ui::AlertState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared cart and alert contexts and sets up client-side
/// routing over the storefront pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let cart = RwSignal::new(CartState::default());
    let alerts = RwSignal::new(AlertState::default());

    provide_context(cart);
    provide_context(alerts);

    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace.css"/>
        <Title text="Marketplace"/>

        <Router>
            <header class="site-header">
                <a class="site-header__brand" href="/">"Marketplace"</a>
                <nav class="site-header__nav">
                    <a href="/cart">"Cart"</a>
                    <a href="/checkout">"Checkout"</a>
                    <CartBadge/>
                </nav>
            </header>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MarketplacePage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("checkout") view=CheckoutPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
            <AlertModal/>
        </Router>
    }
}
