//! Application Context
//!
//! Shared navigation and reload state provided via Leptos Context API.

use leptos::prelude::*;

/// Which page is on screen. No URL router; the sidebar and page buttons
/// switch this signal directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Goals,
    GoalView(u32),
    CreateGoal,
    Coach,
    Settings,
    Pricing,
    Payment,
    Congratulations,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Trigger to reload goals/summary from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload goals/summary from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Switch the visible page.
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Trigger a re-fetch of goals and the dashboard summary.
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
