//! Checkout address form wired to the places/geocoding client.
//!
//! Typing in the address input fetches country-restricted suggestions after
//! a debounce; choosing a suggestion scatters the place's components into
//! the sibling fields and geocodes the chosen address into the hidden
//! coordinate inputs.

use leptos::prelude::*;

use crate::net::places::PlacesClient;
use crate::net::types::Suggestion;
use crate::state::address::AddressFields;

/// Milliseconds of input quiet time before a suggestion lookup fires.
#[cfg(feature = "hydrate")]
const DEBOUNCE_MS: u64 = 300;

/// Postal address form bound to `AddressFields`. The owner passes the
/// signal in so page code (checkout prefill) and this component share it.
#[component]
pub fn AddressForm(form: RwSignal<AddressFields>) -> impl IntoView {
    let suggestions = RwSignal::new(Vec::<Suggestion>::new());
    // Keystroke generation; a newer keystroke supersedes the pending lookup.
    let generation = RwSignal::new(0_u64);

    // One provider handle per mounted form, moved into the callbacks below.
    #[cfg(feature = "hydrate")]
    let places = StoredValue::new(PlacesClient::from_page());
    #[cfg(not(feature = "hydrate"))]
    let places = StoredValue::new(None::<PlacesClient>);

    let on_address_input = move |ev| {
        let typed = event_target_value(&ev);
        form.update(|f| f.address = typed.clone());
        let my_generation = generation.get_untracked() + 1;
        generation.set(my_generation);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(DEBOUNCE_MS)).await;
                if generation.get_untracked() != my_generation {
                    return;
                }
                let Some(client) = places.get_value() else {
                    return;
                };
                let found = client.fetch_suggestions(&typed).await;
                if generation.get_untracked() == my_generation {
                    suggestions.set(found);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (typed, places);
        }
    };

    let choose = Callback::new(move |suggestion: Suggestion| {
        suggestions.set(Vec::new());
        form.update(|f| f.address = suggestion.description.clone());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(client) = places.get_value() else {
                    return;
                };
                if let Some(place) = client.fetch_place(&suggestion.place_id).await {
                    if place.geometry.is_none() {
                        form.update(AddressFields::hint_missing_geometry);
                    }
                    form.update(|f| f.scatter_components(&place.address_components));
                }
                let address = form.get_untracked().address;
                if let Some(point) = client.geocode_address(&address).await {
                    form.update(|f| f.apply_geocode(&point));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (suggestion, places);
        }
    });

    view! {
        <div class="address-form">
            <label class="address-form__label">
                "Address"
                <input
                    id="id_address"
                    class="address-form__input"
                    type="text"
                    autocomplete="off"
                    placeholder=move || form.get().placeholder
                    prop:value=move || form.get().address
                    on:input=on_address_input
                />
            </label>
            <Show when=move || !suggestions.get().is_empty()>
                <ul class="address-form__suggestions">
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|suggestion| {
                                let label = suggestion.description.clone();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            on:click=move |_| choose.run(suggestion.clone())
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            <input id="id_latitude" type="hidden" prop:value=move || form.get().latitude/>
            <input id="id_longitude" type="hidden" prop:value=move || form.get().longitude/>

            <label class="address-form__label">
                "Country"
                <input
                    id="id_country"
                    type="text"
                    prop:value=move || form.get().country
                    on:input=move |ev| form.update(|f| f.country = event_target_value(&ev))
                />
            </label>
            <label class="address-form__label">
                "City"
                <input
                    id="id_city"
                    type="text"
                    prop:value=move || form.get().city
                    on:input=move |ev| form.update(|f| f.city = event_target_value(&ev))
                />
            </label>
            <label class="address-form__label">
                "State"
                <input
                    id="id_state"
                    type="text"
                    prop:value=move || form.get().state_province
                    on:input=move |ev| form.update(|f| f.state_province = event_target_value(&ev))
                />
            </label>
            <label class="address-form__label">
                "Pin code"
                <input
                    id="id_pin_code"
                    type="text"
                    prop:value=move || form.get().pin_code
                    on:input=move |ev| form.update(|f| f.pin_code = event_target_value(&ev))
                />
            </label>
        </div>
    }
}
