//! Payment Page Component
//!
//! Mock payment form. Local state only; submitting performs no network
//! call and moves straight to the confirmation page. Real payment
//! processing is out of scope.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Germany",
    "France",
    "Australia",
    "Japan",
    "Other",
];

#[derive(Clone, Default)]
struct PaymentForm {
    card_number: String,
    expiry_date: String,
    cvc: String,
    name_on_card: String,
    billing_address: String,
    city: String,
    postal_code: String,
    country: String,
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (form, set_form) = signal(PaymentForm::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.navigate(Page::Congratulations);
    };

    let text_field = move |label: &'static str,
                           placeholder: &'static str,
                           get: fn(&PaymentForm) -> String,
                           set: fn(&mut PaymentForm, String)| {
        view! {
            <label>
                <p>{label}</p>
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || get(&form.read())
                    on:input=move |ev| set_form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="full-page">
            <div class="page-topbar">
                <button class="back-btn" on:click=move |_| ctx.navigate(Page::Pricing)>
                    "← Back to Pricing"
                </button>
            </div>

            <h2 class="section-title">"Payment Method"</h2>
            <form class="payment-form" on:submit=on_submit>
                {text_field("Card Number", "Enter card number",
                    |f| f.card_number.clone(), |f, v| f.card_number = v)}
                <div class="form-row">
                    {text_field("Expiry Date", "MM/YY",
                        |f| f.expiry_date.clone(), |f, v| f.expiry_date = v)}
                    {text_field("CVC", "CVC",
                        |f| f.cvc.clone(), |f, v| f.cvc = v)}
                </div>
                {text_field("Name on Card", "Enter name on card",
                    |f| f.name_on_card.clone(), |f, v| f.name_on_card = v)}
                {text_field("Billing Address", "Enter billing address",
                    |f| f.billing_address.clone(), |f, v| f.billing_address = v)}
                <div class="form-row">
                    {text_field("City", "Enter city",
                        |f| f.city.clone(), |f, v| f.city = v)}
                    {text_field("Postal Code", "Enter postal code",
                        |f| f.postal_code.clone(), |f, v| f.postal_code = v)}
                </div>

                <label>
                    <p>"Country"</p>
                    <select
                        prop:value=move || form.read().country.clone()
                        on:change=move |ev| {
                            set_form.update(|f| f.country = event_target_value(&ev))
                        }
                    >
                        <option value="">"Select a country"</option>
                        {COUNTRIES.iter().map(|country| view! {
                            <option value=*country>{*country}</option>
                        }).collect_view()}
                    </select>
                </label>

                <button type="submit" class="primary-btn">"Subscribe"</button>
            </form>
        </div>
    }
}
