//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! a cache of server state, invalidated by re-fetch; it is never the
//! source of truth.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, DashboardSummary, Goal};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All goals, as last fetched
    pub goals: Vec<Goal>,
    /// Category reference data, fetched once per session
    pub categories: Vec<Category>,
    /// Dashboard aggregate
    pub summary: DashboardSummary,
    /// True until the dashboard's initial summary + goals fetch lands
    pub loading_dashboard: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading_dashboard: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a goal in the store by ID
pub fn store_update_goal(store: &AppStore, updated_goal: Goal) {
    if let Some(goal) = store
        .goals()
        .write()
        .iter_mut()
        .find(|goal| goal.id == updated_goal.id)
    {
        *goal = updated_goal;
    }
}

/// Remove a goal from the store by ID
pub fn store_remove_goal(store: &AppStore, goal_id: u32) {
    store.goals().write().retain(|goal| goal.id != goal_id);
}

/// Resolve a category name for display, for goals whose denormalized
/// category string is missing.
pub fn store_category_name(store: &AppStore, category_id: u32) -> Option<String> {
    store
        .categories()
        .read()
        .iter()
        .find(|c| c.id == category_id)
        .and_then(|c| c.name.clone())
}
