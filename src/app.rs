//! Goal Getter Frontend App
//!
//! Root component: provides the API client, store, and navigation
//! context, then renders whichever page is active. Dashboard, goals,
//! and settings live inside the sidebar layout; the remaining pages are
//! full-screen.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{
    AiCoachPage, CongratulationsPage, CreateGoalPage, Dashboard, GoalViewPage, GoalsPage,
    PaymentPage, PricingPage, SettingsPage, Sidebar,
};
use crate::context::{AppContext, Page};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let page = signal(Page::Dashboard);
    let reload_trigger = signal(0u32);

    provide_context(AppContext::new(page, reload_trigger));
    provide_context::<AppStore>(reactive_stores::Store::new(AppState::new()));
    provide_context(ApiClient::from_env());

    let (page, _) = page;

    view! {
        {move || match page.get() {
            Page::Dashboard => view! { <Sidebar><Dashboard /></Sidebar> }.into_any(),
            Page::Goals => view! { <Sidebar><GoalsPage /></Sidebar> }.into_any(),
            Page::Settings => view! { <Sidebar><SettingsPage /></Sidebar> }.into_any(),
            Page::GoalView(goal_id) => view! { <GoalViewPage goal_id=goal_id /> }.into_any(),
            Page::CreateGoal => view! { <CreateGoalPage /> }.into_any(),
            Page::Coach => view! { <AiCoachPage /> }.into_any(),
            Page::Pricing => view! { <PricingPage /> }.into_any(),
            Page::Payment => view! { <PaymentPage /> }.into_any(),
            Page::Congratulations => view! { <CongratulationsPage /> }.into_any(),
        }}
    }
}
