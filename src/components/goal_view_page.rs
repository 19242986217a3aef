//! Goal View Page Component
//!
//! Detail view for one goal: status changes, task completion toggles,
//! adding tasks, and deleting the goal. Mutations are optimistic: the
//! local copy is updated immediately, the write is issued, and on
//! success the full goal is re-fetched to pick up server-derived fields
//! (progress, counts). A failed write sets an error message but does not
//! roll back the optimistic change; the next full load reconciles.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, GoalPatch, NewTask, TaskPatch};
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, Page};
use crate::models::{format_date, Goal, GoalStatus};
use crate::store::{store_remove_goal, store_update_goal, use_app_store};

#[component]
pub fn GoalViewPage(goal_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();

    let (goal, set_goal) = signal::<Option<Goal>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (updating, set_updating) = signal(false);
    let (new_task, set_new_task) = signal(String::new());

    // Initial load: a failure here is terminal for the page.
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                set_loading.set(true);
                set_error.set(None);
                match api.get_goal_by_id(goal_id).await {
                    Ok(fetched) => set_goal.set(Some(fetched)),
                    Err(err) => {
                        #[cfg(target_arch = "wasm32")]
                        web_sys::console::error_1(
                            &format!("[GOAL] Error fetching goal {goal_id}: {err}").into(),
                        );
                        let _ = err;
                        set_error.set(Some(
                            "Failed to load goal. Please try again later.".to_string(),
                        ));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    // Silent re-fetch after a successful mutation; keeps the page out of
    // its loading state and ignores failures (the optimistic copy stands).
    let refetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(fetched) = api.get_goal_by_id(goal_id).await {
                    store_update_goal(&store, fetched.clone());
                    set_goal.set(Some(fetched));
                }
            });
        }
    };

    let handle_status_update = {
        let api = api.clone();
        let refetch = refetch.clone();
        move |new_status: GoalStatus| {
            let api = api.clone();
            let refetch = refetch.clone();
            spawn_local(async move {
                set_updating.set(true);
                set_goal.update(|g| {
                    if let Some(g) = g.as_mut() {
                        g.set_status(new_status);
                    }
                });
                match api.update_goal(goal_id, &GoalPatch::status(new_status)).await {
                    Ok(()) => refetch(),
                    Err(_) => set_error.set(Some(
                        "Failed to update goal status. Please try again.".to_string(),
                    )),
                }
                set_updating.set(false);
            });
        }
    };

    let handle_task_toggle = {
        let api = api.clone();
        let refetch = refetch.clone();
        move |task_id: u32, is_completed: bool| {
            let api = api.clone();
            let refetch = refetch.clone();
            spawn_local(async move {
                set_updating.set(true);
                set_goal.update(|g| {
                    if let Some(g) = g.as_mut() {
                        g.set_task_completed(task_id, is_completed);
                    }
                });
                match api
                    .update_task(goal_id, task_id, &TaskPatch::completed(is_completed))
                    .await
                {
                    Ok(()) => refetch(),
                    Err(_) => set_error.set(Some(
                        "Failed to update task. Please try again.".to_string(),
                    )),
                }
                set_updating.set(false);
            });
        }
    };

    let handle_add_task = {
        let api = api.clone();
        let refetch = refetch.clone();
        move || {
            let description = new_task.get();
            if description.trim().is_empty() {
                return;
            }
            let api = api.clone();
            let refetch = refetch.clone();
            spawn_local(async move {
                set_updating.set(true);
                let task = NewTask {
                    description: description.trim().to_string(),
                };
                match api.add_task_to_goal(goal_id, &task).await {
                    Ok(()) => {
                        set_new_task.set(String::new());
                        refetch();
                    }
                    Err(_) => set_error.set(Some(
                        "Failed to add task. Please try again.".to_string(),
                    )),
                }
                set_updating.set(false);
            });
        }
    };

    let handle_delete = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_goal(goal_id).await {
                    Ok(()) => {
                        store_remove_goal(&store, goal_id);
                        ctx.reload();
                        ctx.navigate(Page::Goals);
                    }
                    Err(_) => set_error.set(Some(
                        "Failed to delete goal. Please try again.".to_string(),
                    )),
                }
            });
        }
    };

    let back_to_goals = move |_| {
        // Dashboard/goals caches may be stale after edits here.
        ctx.reload();
        ctx.navigate(Page::Goals);
    };

    view! {
        <div class="full-page">
            <div class="page-topbar">
                <button class="back-btn" on:click=back_to_goals>
                    "← Back to Goals"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="page-loading">"Loading goal..."</div> }.into_any();
                }
                if goal.get().is_none() {
                    if let Some(message) = error.get() {
                        return view! { <div class="page-error">{message}</div> }.into_any();
                    }
                    return view! { <div class="page-loading">"Goal not found"</div> }.into_any();
                }
                let handle_status_update = handle_status_update.clone();
                let handle_task_toggle = handle_task_toggle.clone();
                let handle_add_task = handle_add_task.clone();
                let handle_delete = handle_delete.clone();
                view! {
                    <GoalDetail
                        goal=goal
                        error=error
                        updating=updating
                        new_task=new_task
                        set_new_task=set_new_task
                        on_status=Callback::new(move |s| handle_status_update(s))
                        on_toggle=Callback::new(move |(id, done)| handle_task_toggle(id, done))
                        on_add_task=Callback::new(move |()| handle_add_task())
                        on_delete=Callback::new(move |()| handle_delete())
                    />
                }
                .into_any()
            }}
        </div>
    }
}

/// Inner detail view, rendered once the goal is loaded.
#[component]
fn GoalDetail(
    goal: ReadSignal<Option<Goal>>,
    error: ReadSignal<Option<String>>,
    updating: ReadSignal<bool>,
    new_task: ReadSignal<String>,
    set_new_task: WriteSignal<String>,
    on_status: Callback<GoalStatus>,
    on_toggle: Callback<(u32, bool)>,
    on_add_task: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let current = move || goal.get().expect("GoalDetail rendered without a goal");
    let pct = move || current().progress.round() as i64;

    let status_options = move || {
        let status = current().status;
        GoalStatus::ALL
            .into_iter()
            .filter(move |s| *s != status)
            .collect::<Vec<_>>()
    };

    let on_pick_status = move |ev: web_sys::Event| {
        if let Some(status) = GoalStatus::parse(&event_target_value(&ev)) {
            on_status.run(status);
        }
    };

    view! {
        <div class="goal-detail">
            {move || error.get().map(|message| view! { <div class="inline-error">{message}</div> })}

            <div class="goal-detail-header">
                <div>
                    <h1 class="page-title">{move || current().title}</h1>
                    <div class="goal-meta muted">
                        <span>{move || format!(
                            "Category: {}",
                            current().category.unwrap_or_else(|| "Uncategorized".to_string())
                        )}</span>
                        <span>{move || format!("Due: {}", format_date(&current().target_date))}</span>
                        <span>{move || format!("Progress: {}%", pct())}</span>
                    </div>
                </div>

                <div class="status-controls">
                    <span class=move || current().status.css_class()>
                        {move || current().status.label()}
                    </span>
                    <select
                        prop:value=""
                        disabled=move || updating.get()
                        on:change=on_pick_status
                    >
                        <option value="">"Change Status"</option>
                        <For
                            each=status_options
                            key=|status| status.as_str()
                            children=move |status| {
                                view! {
                                    <option value=status.as_str()>{status.label()}</option>
                                }
                            }
                        />
                    </select>
                    <DeleteConfirmButton
                        button_class="delete-goal-btn"
                        on_confirm=on_delete
                    />
                </div>
            </div>

            <div class="overall-progress">
                <div class="progress-row">
                    <span>"Overall Progress"</span>
                    <span class="muted">{move || format!("{}%", pct())}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style=move || format!("width: {}%;", pct())></div>
                </div>
            </div>

            <div class="goal-columns">
                <div class="goal-info-column">
                    {move || current().description.map(|description| view! {
                        <h3 class="section-title">"Description"</h3>
                        <div class="info-card"><p>{description}</p></div>
                    })}
                    {move || current().plan.map(|plan| view! {
                        <h3 class="section-title">"Plan"</h3>
                        <div class="info-card preline"><p>{plan}</p></div>
                    })}

                    <h3 class="section-title">"Goal Information"</h3>
                    <div class="info-card">
                        <div class="info-row">
                            <span class="muted">"Created:"</span>
                            <span>{move || format_date(&current().created_at)}</span>
                        </div>
                        {move || current().updated_at.map(|updated| view! {
                            <div class="info-row">
                                <span class="muted">"Last Updated:"</span>
                                <span>{format_date(&updated)}</span>
                            </div>
                        })}
                        <div class="info-row">
                            <span class="muted">"Tasks Completed:"</span>
                            <span>{move || format!(
                                "{} / {}",
                                current().completed_tasks,
                                current().total_tasks
                            )}</span>
                        </div>
                    </div>
                </div>

                <div class="goal-tasks-column">
                    <h3 class="section-title">"Tasks"</h3>

                    <div class="add-task-row">
                        <input
                            type="text"
                            placeholder="Add a task"
                            prop:value=move || new_task.get()
                            on:input=move |ev| set_new_task.set(event_target_value(&ev))
                        />
                        <button
                            class="primary-btn"
                            disabled=move || updating.get()
                            on:click=move |_| on_add_task.run(())
                        >
                            "Add Task"
                        </button>
                    </div>

                    {move || {
                        let tasks = current().tasks.unwrap_or_default();
                        if tasks.is_empty() {
                            view! {
                                <div class="info-card">
                                    <p class="muted">"No tasks yet. Add your first task above!"</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            tasks
                                .into_iter()
                                .map(|task| {
                                    let id = task.id;
                                    let done = task.is_completed;
                                    view! {
                                        <div class=if done { "task-card completed" } else { "task-card" }>
                                            <input
                                                type="checkbox"
                                                checked=done
                                                disabled=move || updating.get()
                                                on:change=move |_| on_toggle.run((id, !done))
                                            />
                                            <span class=if done { "task-text done" } else { "task-text" }>
                                                {task.description.clone().unwrap_or_default()}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
