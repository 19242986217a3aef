//! Create Goal Page Component
//!
//! Full-screen form for setting a new goal, with the task list builder
//! and the coach widget opened alongside. Validation runs before any
//! request; on success the app shows a confirmation and returns to the
//! goals list after a short delay.

use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::AiCoach;
use crate::context::{AppContext, Page};
use crate::forms::CreateGoalForm;
use crate::store::{use_app_store, AppStateStoreFields};

/// Delay before navigating back to the goals list after a create.
const REDIRECT_DELAY_MS: u32 = 1_500;

/// Today according to the browser clock.
fn local_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .expect("js Date produced an invalid calendar day")
}

#[component]
pub fn CreateGoalPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();

    let (form, set_form) = signal(CreateGoalForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);
    let (created, set_created) = signal(false);

    // Categories are reference data; fetch once per session.
    {
        let api = api.clone();
        Effect::new(move |_| {
            if !store.categories().read().is_empty() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                let categories = api.get_all_categories().await;
                *store.categories().write() = categories;
            });
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = match form.read().validate(local_today()) {
            Ok(body) => body,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        let api = api.clone();
        spawn_local(async move {
            set_submitting.set(true);
            set_error.set(None);
            match api.create_goal(&body).await {
                Ok(()) => {
                    set_created.set(true);
                    ctx.reload();
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    ctx.navigate(Page::Goals);
                }
                Err(_) => {
                    set_error.set(Some("Failed to create goal. Please try again.".to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="full-page">
            <div class="page-topbar">
                <button class="back-btn" on:click=move |_| ctx.navigate(Page::Goals)>
                    "← Back to Goals"
                </button>
            </div>

            <form class="create-goal-form" on:submit=on_submit>
                <p class="page-title">"Set a New Goal"</p>

                {move || error.get().map(|message| view! { <div class="inline-error">{message}</div> })}
                <Show when=move || created.get()>
                    <div class="inline-success">"Goal created! Taking you back to your goals..."</div>
                </Show>

                <div class="form-columns">
                    <div class="form-inputs">
                        <label>
                            <p>"Goal Title"</p>
                            <input
                                type="text"
                                placeholder="e.g., Run a marathon"
                                prop:value=move || form.read().title.clone()
                                on:input=move |ev| {
                                    set_form.update(|f| f.title = event_target_value(&ev))
                                }
                            />
                        </label>

                        <div class="form-row">
                            <label>
                                <p>"Category"</p>
                                <select
                                    prop:value=move || form.read().category_id.clone()
                                    on:change=move |ev| {
                                        set_form.update(|f| f.category_id = event_target_value(&ev))
                                    }
                                >
                                    <option value="">"Select a category"</option>
                                    <For
                                        each=move || store.categories().get()
                                        key=|category| category.id
                                        children=move |category| {
                                            view! {
                                                <option value=category.id.to_string()>
                                                    {category.name.clone().unwrap_or_default()}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                            </label>
                            <label>
                                <p>"Target Date"</p>
                                <input
                                    type="date"
                                    prop:value=move || form.read().target_date.clone()
                                    on:input=move |ev| {
                                        set_form.update(|f| f.target_date = event_target_value(&ev))
                                    }
                                />
                            </label>
                        </div>

                        <label>
                            <p>"Description"</p>
                            <textarea
                                placeholder="Describe your goal in detail"
                                prop:value=move || form.read().description.clone()
                                on:input=move |ev| {
                                    set_form.update(|f| f.description = event_target_value(&ev))
                                }
                            ></textarea>
                        </label>
                        <label>
                            <p>"Plan"</p>
                            <textarea
                                placeholder="Outline the steps to achieve your goal"
                                prop:value=move || form.read().plan.clone()
                                on:input=move |ev| {
                                    set_form.update(|f| f.plan = event_target_value(&ev))
                                }
                            ></textarea>
                        </label>

                        <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                            "Set Goal"
                        </button>
                    </div>

                    <div class="form-tasks">
                        <h3 class="section-title">"Tasks"</h3>
                        <input
                            type="text"
                            placeholder="Add a task"
                            prop:value=move || form.read().new_task.clone()
                            on:input=move |ev| {
                                set_form.update(|f| f.new_task = event_target_value(&ev))
                            }
                        />
                        <button
                            type="button"
                            class="secondary-btn"
                            on:click=move |_| set_form.update(|f| f.add_task())
                        >
                            "Add Task"
                        </button>

                        <div class="task-list">
                            {move || {
                                form.read()
                                    .tasks
                                    .iter()
                                    .enumerate()
                                    .map(|(index, task)| {
                                        let task = task.clone();
                                        view! {
                                            <div class="task-card">
                                                <span class="task-text">{task}</span>
                                                <button
                                                    type="button"
                                                    class="remove-task-btn"
                                                    on:click=move |_| {
                                                        set_form.update(|f| f.remove_task(index))
                                                    }
                                                >
                                                    "×"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </form>

            <AiCoach default_open=true />
        </div>
    }
}
