//! Login page the login-required flow navigates to.

use leptos::prelude::*;

/// Login page — the form itself is served by the accounts app; this page
/// just links to it.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Marketplace"</h1>
            <p>"Please log in to manage your cart."</p>
            <a href="/accounts/login/" class="login-button">
                "Log in"
            </a>
        </div>
    }
}
