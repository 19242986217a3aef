//! Sidebar Layout Component
//!
//! Fixed navigation column wrapping the dashboard, goals, and settings
//! pages, plus the floating coach widget.

use leptos::prelude::*;

use crate::components::AiCoach;
use crate::context::{AppContext, Page};

const NAV_ITEMS: &[(&str, Page)] = &[
    ("Home", Page::Dashboard),
    ("Goals", Page::Goals),
    ("AI Coach", Page::Coach),
    ("Settings", Page::Settings),
];

/// Sidebar layout with navigation and scrollable content area
#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="app-shell">
            <nav class="sidebar">
                <div class="sidebar-top">
                    <h1 class="sidebar-brand">"Goal Getter"</h1>
                    <div class="sidebar-nav">
                        {NAV_ITEMS.iter().map(|(label, page)| {
                            let page = *page;
                            let is_active = move || ctx.page.get() == page;
                            view! {
                                <button
                                    class=move || if is_active() { "nav-item active" } else { "nav-item" }
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {*label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="sidebar-bottom">
                    <button
                        class="upgrade-btn"
                        on:click=move |_| ctx.navigate(Page::Pricing)
                    >
                        "Upgrade Plan"
                    </button>
                    <p class="sidebar-note">"Unlock pro features with our premium plan"</p>
                    <p class="sidebar-note">"We only accept Stripe as payment provider"</p>
                </div>
            </nav>

            <main class="main-content">{children()}</main>

            <AiCoach default_open=false />
        </div>
    }
}
