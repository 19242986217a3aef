//! Pricing Page Component
//!
//! Static plan cards; selecting a paid plan moves into the mock payment
//! flow.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

struct PricingPlan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    badge: Option<&'static str>,
    features: &'static [&'static str],
    button_text: &'static str,
    disabled: bool,
}

const PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic",
        price: "Free",
        period: "/month",
        badge: None,
        features: &["Track up to 3 goals", "Basic reporting", "Community access"],
        button_text: "Current Plan",
        disabled: true,
    },
    PricingPlan {
        name: "Pro",
        price: "$9.99",
        period: "/month",
        badge: Some("Most Popular"),
        features: &[
            "Unlimited goal tracking",
            "Advanced reporting",
            "Priority support",
            "Exclusive content",
        ],
        button_text: "Select",
        disabled: false,
    },
    PricingPlan {
        name: "Premium",
        price: "$19.99",
        period: "/month",
        badge: Some("Best Value"),
        features: &[
            "All Pro features",
            "Personalized coaching",
            "VIP community access",
            "Early access to new features",
        ],
        button_text: "Select",
        disabled: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="full-page">
            <div class="page-topbar">
                <button class="back-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>
                    "← Back to Dashboard"
                </button>
            </div>

            <p class="page-title">"Upgrade your plan"</p>
            <div class="pricing-cards">
                {PLANS.iter().map(|plan| {
                    let disabled = plan.disabled;
                    view! {
                        <div class="pricing-card">
                            <div class="pricing-card-header">
                                <h3>{plan.name}</h3>
                                {plan.badge.map(|badge| view! { <span class="plan-badge">{badge}</span> })}
                            </div>
                            <p class="plan-price">
                                {plan.price}
                                <span class="muted">{plan.period}</span>
                            </p>
                            <ul class="plan-features">
                                {plan.features.iter().map(|feature| view! {
                                    <li>{*feature}</li>
                                }).collect_view()}
                            </ul>
                            <button
                                class="secondary-btn"
                                disabled=disabled
                                on:click=move |_| {
                                    if !disabled {
                                        ctx.navigate(Page::Payment);
                                    }
                                }
                            >
                                {plan.button_text}
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
