//! Modal alert for cart mutation outcomes.
//!
//! Renders the shared `AlertState`; dismissing the alert follows its
//! redirect, so the login-required prompt is read before navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::ui::{AlertKind, AlertState};

/// Site-wide modal; at most one alert is shown at a time.
#[component]
pub fn AlertModal() -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertState>>();
    let navigate = use_navigate();

    let dismiss = Callback::new(move |()| {
        if let Some(target) = alerts.try_update(AlertState::dismiss).flatten() {
            navigate(&target, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || alerts.get().current.is_some()>
            {move || {
                alerts
                    .get()
                    .current
                    .map(|alert| {
                        let dialog_class = match alert.kind {
                            AlertKind::Info => "dialog alert-dialog alert-dialog--info",
                            AlertKind::Error => "dialog alert-dialog alert-dialog--error",
                        };
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| dismiss.run(())>
                                <div class=dialog_class on:click=move |ev| ev.stop_propagation()>
                                    <p class="alert-dialog__message">{alert.message}</p>
                                    <div class="dialog__actions">
                                        <button class="btn btn--primary" on:click=move |_| dismiss.run(())>
                                            "OK"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
