//! Congratulations Page Component
//!
//! Post-payment confirmation with a countdown back to the dashboard.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Page};

const COUNTDOWN_SECONDS: u32 = 10;

#[component]
pub fn CongratulationsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (countdown, set_countdown) = signal(COUNTDOWN_SECONDS);

    // Tick once a second; navigating away earlier just orphans the loop,
    // which stops itself when the page signal moves on.
    Effect::new(move |_| {
        spawn_local(async move {
            for remaining in (0..COUNTDOWN_SECONDS).rev() {
                TimeoutFuture::new(1_000).await;
                if ctx.page.get_untracked() != Page::Congratulations {
                    return;
                }
                set_countdown.set(remaining);
            }
            ctx.navigate(Page::Dashboard);
        });
    });

    view! {
        <div class="full-page centered">
            <div class="congrats-card">
                <div class="success-icon">"✓"</div>
                <h1>"Payment Successful!"</h1>
                <p class="muted">"Your subscription has been activated."</p>
                <p class="muted small">
                    {move || format!("Redirecting in {} seconds...", countdown.get())}
                </p>
                <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>
                    "Continue to Dashboard"
                </button>
            </div>
        </div>
    }
}
