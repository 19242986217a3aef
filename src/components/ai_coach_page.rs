//! AI Coach Page Component
//!
//! Full-page chat sharing the widget's history handling and canned
//! replies.

use leptos::prelude::*;

use crate::coach::Sender;
use crate::components::ai_coach::{initial_history, send_message};
use crate::context::{AppContext, Page};

#[component]
pub fn AiCoachPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (input, set_input) = signal(String::new());
    let (history, set_history) = signal(initial_history());

    let on_send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        send_message(set_history, input, set_input);
    };

    view! {
        <div class="full-page coach-page">
            <div class="page-topbar">
                <button class="back-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>
                    "← Back to Dashboard"
                </button>
            </div>

            <div class="coach-page-header">
                <h2>"AI Coach"</h2>
                <p class="muted">"Your personal goal-achievement assistant"</p>
            </div>

            <div class="coach-messages page">
                <For
                    each=move || history.get()
                    key=|message| message.id
                    children=move |message| {
                        let css = match message.sender {
                            Sender::User => "chat-message user",
                            Sender::Coach => "chat-message coach",
                        };
                        view! {
                            <div class=css>
                                <p class="chat-text">{message.message.clone()}</p>
                                <span class="chat-time muted">{message.timestamp.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>

            <form class="coach-input-row page" on:submit=on_send>
                <input
                    type="text"
                    placeholder="Ask about planning, motivation, or time management..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"Send"</button>
            </form>
        </div>
    }
}
