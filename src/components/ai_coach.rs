//! AI Coach Widget Component
//!
//! Floating chat popup in the corner of the screen. Replies come from
//! the canned-response generator after a short simulated delay; there is
//! no real inference behind it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::coach::{generate_reply, CoachMessage, Sender, GREETING};

/// Simulated "thinking" delay before the canned reply appears.
pub(crate) const REPLY_DELAY_MS: u32 = 1_000;

/// Clock time like "10:30 AM", from the browser locale.
pub(crate) fn now_timestamp() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}

pub(crate) fn initial_history() -> Vec<CoachMessage> {
    vec![CoachMessage {
        id: 0,
        message: GREETING.to_string(),
        sender: Sender::Coach,
        timestamp: "10:30 AM".to_string(),
    }]
}

/// Append the user's message and, after the delay, the coach's reply.
pub(crate) fn send_message(
    history: WriteSignal<Vec<CoachMessage>>,
    input: ReadSignal<String>,
    set_input: WriteSignal<String>,
) {
    let message = input.get();
    if message.trim().is_empty() {
        return;
    }
    set_input.set(String::new());

    history.update(|h| {
        let id = h.last().map(|m| m.id + 1).unwrap_or(0);
        h.push(CoachMessage {
            id,
            message: message.clone(),
            sender: Sender::User,
            timestamp: now_timestamp(),
        });
    });

    spawn_local(async move {
        TimeoutFuture::new(REPLY_DELAY_MS).await;
        history.update(|h| {
            let id = h.last().map(|m| m.id + 1).unwrap_or(0);
            h.push(CoachMessage {
                id,
                message: generate_reply(&message).to_string(),
                sender: Sender::Coach,
                timestamp: now_timestamp(),
            });
        });
    });
}

/// Floating coach chat popup
#[component]
pub fn AiCoach(default_open: bool) -> impl IntoView {
    let (is_open, set_is_open) = signal(default_open);
    let (input, set_input) = signal(String::new());
    let (history, set_history) = signal(initial_history());

    let on_send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        send_message(set_history, input, set_input);
    };

    view! {
        <div class="coach-widget">
            <Show when=move || is_open.get()>
                <div class="coach-popup">
                    <div class="coach-header">
                        <div>
                            <h3>"AI Coach"</h3>
                            <p class="muted">"Online"</p>
                        </div>
                        <button class="close-btn" on:click=move |_| set_is_open.set(false)>
                            "×"
                        </button>
                    </div>

                    <div class="coach-messages">
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

                    <form class="coach-input-row" on:submit=on_send>
                        <input
                            type="text"
                            placeholder="Ask your coach..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                        />
                        <button type="submit">"Send"</button>
                    </form>
                </div>
            </Show>

            <button
                class="coach-toggle-btn"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                "AI Coach"
            </button>
        </div>
    }
}
