//! Settings Page Component
//!
//! Profile, notification, and preference forms. Local state only; the
//! saves are logged no-ops, as in the rest of the account surface.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[derive(Clone)]
struct Profile {
    name: String,
    email: String,
    bio: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            bio: "Goal-oriented individual focused on personal growth and achievement.".to_string(),
        }
    }
}

#[derive(Clone)]
struct Notifications {
    email: bool,
    push: bool,
    reminders: bool,
    weekly_reports: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            reminders: true,
            weekly_reports: true,
        }
    }
}

fn log_saved(what: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("[SETTINGS] {what} saved").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[SETTINGS] {what} saved");
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (profile, set_profile) = signal(Profile::default());
    let (notifications, set_notifications) = signal(Notifications::default());
    let (theme, set_theme) = signal("dark".to_string());

    let toggle = move |label: &'static str,
                       get: fn(&Notifications) -> bool,
                       set: fn(&mut Notifications, bool)| {
        view! {
            <label class="toggle-row">
                <span>{label}</span>
                <input
                    type="checkbox"
                    checked=move || get(&notifications.read())
                    on:change=move |_| {
                        set_notifications.update(|n| {
                            let flipped = !get(n);
                            set(n, flipped);
                        })
                    }
                />
            </label>
        }
    };

    view! {
        <div class="page-topbar">
            <button class="back-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>
                "← Back to Dashboard"
            </button>
        </div>

        <p class="page-title">"Settings"</p>

        <div class="form-columns">
            <div class="form-inputs">
                <h3 class="section-title">"Profile"</h3>
                <label>
                    <p>"Full Name"</p>
                    <input
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || profile.read().name.clone()
                        on:input=move |ev| {
                            set_profile.update(|p| p.name = event_target_value(&ev))
                        }
                    />
                </label>
                <label>
                    <p>"Email Address"</p>
                    <input
                        type="email"
                        placeholder="Enter your email address"
                        prop:value=move || profile.read().email.clone()
                        on:input=move |ev| {
                            set_profile.update(|p| p.email = event_target_value(&ev))
                        }
                    />
                </label>
                <label>
                    <p>"Bio"</p>
                    <textarea
                        prop:value=move || profile.read().bio.clone()
                        on:input=move |ev| {
                            set_profile.update(|p| p.bio = event_target_value(&ev))
                        }
                    ></textarea>
                </label>
                <button class="secondary-btn" on:click=move |_| log_saved("Profile")>
                    "Save Profile"
                </button>
            </div>

            <div class="form-inputs">
                <h3 class="section-title">"Notifications"</h3>
                {toggle("Email notifications", |n| n.email, |n, v| n.email = v)}
                {toggle("Push notifications", |n| n.push, |n, v| n.push = v)}
                {toggle("Goal reminders", |n| n.reminders, |n, v| n.reminders = v)}
                {toggle("Weekly reports", |n| n.weekly_reports, |n, v| n.weekly_reports = v)}
                <button class="secondary-btn" on:click=move |_| log_saved("Notifications")>
                    "Save Notifications"
                </button>

                <h3 class="section-title">"Preferences"</h3>
                <label>
                    <p>"Theme"</p>
                    <select
                        prop:value=move || theme.get()
                        on:change=move |ev| set_theme.set(event_target_value(&ev))
                    >
                        <option value="dark">"Dark"</option>
                        <option value="light">"Light"</option>
                    </select>
                </label>
                <button class="secondary-btn" on:click=move |_| log_saved("Preferences")>
                    "Save Preferences"
                </button>
            </div>
        </div>
    }
}
