//! Dashboard Component
//!
//! Welcome header, stat cards, overall progress, and the goals summary
//! table. Summary and goals are fetched concurrently; neither fetch can
//! fail (both degrade to defaults in the API client), so the page always
//! renders once the join lands.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{AppContext, Page};
use crate::models::format_date;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();

    // Load summary + goals together whenever the reload trigger fires.
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let api = api.clone();
        spawn_local(async move {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&format!("[APP] Loading dashboard, trigger={trigger}").into());
            let _ = trigger;
            let (summary, goals) =
                futures::join!(api.get_dashboard_summary(), api.get_all_goals());
            *store.summary().write() = summary;
            *store.goals().write() = goals;
            *store.loading_dashboard().write() = false;
        });
    });

    let summary = move || store.summary().get();
    let overall = move || summary().overall_progress.round() as i64;

    view! {
        <Show
            when=move || !store.loading_dashboard().get()
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <div class="page-header">
                <p class="page-title">{move || format!("Welcome back, {}", summary().user_name)}</p>
            </div>

            <div class="stat-cards">
                <div class="stat-card">
                    <p class="stat-label">"Goals Completed"</p>
                    <p class="stat-value">{move || summary().goals_completed}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">"Goals in Progress"</p>
                    <p class="stat-value">{move || summary().goals_in_progress}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">"Accountability Streak"</p>
                    <p class="stat-value">{move || summary().accountability_streak}</p>
                </div>
            </div>

            <div class="overall-progress">
                <div class="progress-row">
                    <p class="stat-label">"Overall Progress"</p>
                    <p class="progress-pct">{move || format!("{}%", overall())}</p>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {}%;", overall())
                    ></div>
                </div>
            </div>

            <div class="actions-row">
                <button class="primary-btn" on:click=move |_| ctx.navigate(Page::CreateGoal)>
                    "Add New Goal"
                </button>
            </div>

            <h2 class="section-title">"Goals Summary"</h2>
            <table class="goals-table">
                <thead>
                    <tr>
                        <th>"Goal"</th>
                        <th>"Progress"</th>
                        <th>"Due Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.goals().get()
                        key=|goal| goal.id
                        children=move |goal| {
                            let pct = goal.progress.round() as i64;
                            view! {
                                <tr>
                                    <td>{goal.title.clone()}</td>
                                    <td>
                                        <div class="progress-cell">
                                            <div class="progress-track small">
                                                <div
                                                    class="progress-fill"
                                                    style=format!("width: {pct}%;")
                                                ></div>
                                            </div>
                                            <p>{pct}</p>
                                        </div>
                                    </td>
                                    <td class="muted">{format_date(&goal.target_date)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
