//! Goals Page Component
//!
//! Filterable table of every goal with status badges and an action
//! column navigating into the goal view. Goals are re-fetched on mount
//! and whenever the reload trigger fires, so the table reflects creates
//! and deletes made on the full-screen pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{AppContext, Page};
use crate::models::{format_date, Goal, GoalStatus};
use crate::store::{store_category_name, use_app_store, AppStateStoreFields};

const FILTER_OPTIONS: &[&str] = &["All Goals", "Active", "Completed", "Failed"];

fn matches_filter(goal: &Goal, filter: &str) -> bool {
    match filter {
        "Active" => matches!(
            goal.status,
            GoalStatus::NotStarted | GoalStatus::InProgress
        ),
        "Completed" => goal.status == GoalStatus::Completed,
        "Failed" => goal.status == GoalStatus::Failed,
        _ => true,
    }
}

#[component]
pub fn GoalsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();
    let (active_filter, set_active_filter) = signal("All Goals".to_string());

    // The store is only a cache; refresh it whenever this page mounts or
    // a reload is requested.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = api.clone();
        spawn_local(async move {
            let goals = api.get_all_goals().await;
            *store.goals().write() = goals;
        });
    });

    let filtered = move || {
        let filter = active_filter.get();
        store
            .goals()
            .get()
            .into_iter()
            .filter(|goal| matches_filter(goal, &filter))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page-header">
            <div>
                <p class="page-title">"My Goals"</p>
                <p class="muted">"Track your progress and stay motivated"</p>
            </div>
            <button class="primary-btn" on:click=move |_| ctx.navigate(Page::CreateGoal)>
                "Add New Goal"
            </button>
        </div>

        <div class="filter-tabs">
            {FILTER_OPTIONS.iter().map(|filter| {
                let value = filter.to_string();
                let label = *filter;
                let is_active = {
                    let value = value.clone();
                    move || active_filter.get() == value
                };
                view! {
                    <button
                        class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                        on:click=move |_| set_active_filter.set(value.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>

        <table class="goals-table">
            <thead>
                <tr>
                    <th>"Goal"</th>
                    <th>"Category"</th>
                    <th>"Deadline"</th>
                    <th>"Progress"</th>
                    <th>"Status"</th>
                    <th class="muted">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=filtered
                    key=|goal| goal.id
                    children=move |goal| {
                        let id = goal.id;
                        let pct = goal.progress.round() as i64;
                        let action = if goal.status == GoalStatus::Completed { "View" } else { "Edit" };
                        let category = goal
                            .category
                            .clone()
                            .or_else(|| store_category_name(&store, goal.category_id))
                            .unwrap_or_else(|| "Uncategorized".to_string());
                        view! {
                            <tr>
                                <td>{goal.title.clone()}</td>
                                <td class="muted">{category}</td>
                                <td class="muted">{format_date(&goal.target_date)}</td>
                                <td>
                                    <div class="progress-cell">
                                        <div class="progress-track small">
                                            <div class="progress-fill" style=format!("width: {pct}%;")></div>
                                        </div>
                                        <p>{pct}</p>
                                    </div>
                                </td>
                                <td>
                                    <span class=goal.status.css_class()>{goal.status.label()}</span>
                                </td>
                                <td>
                                    <button
                                        class="link-btn"
                                        on:click=move |_| ctx.navigate(Page::GoalView(id))
                                    >
                                        {action}
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal_with_status(id: u32, status: GoalStatus) -> Goal {
        Goal {
            id,
            title: format!("Goal {id}"),
            description: None,
            plan: None,
            category_id: 1,
            category: None,
            target_date: "2030-01-01T00:00:00".to_string(),
            status,
            created_at: "2024-01-01T00:00:00".to_string(),
            updated_at: None,
            tasks: None,
            progress: 0.0,
            total_tasks: 0,
            completed_tasks: 0,
        }
    }

    #[test]
    fn active_filter_covers_not_started_and_in_progress() {
        assert!(matches_filter(
            &goal_with_status(1, GoalStatus::NotStarted),
            "Active"
        ));
        assert!(matches_filter(
            &goal_with_status(2, GoalStatus::InProgress),
            "Active"
        ));
        assert!(!matches_filter(
            &goal_with_status(3, GoalStatus::Completed),
            "Active"
        ));
    }

    #[test]
    fn all_goals_matches_everything() {
        for status in GoalStatus::ALL {
            assert!(matches_filter(&goal_with_status(1, status), "All Goals"));
        }
    }
}
