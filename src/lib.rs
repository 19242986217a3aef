//! Goal Getter Frontend
//!
//! Leptos CSR goal-tracking app: dashboards, goal lists, a goal detail
//! view with optimistic status/task updates, an AI coach chat with
//! canned replies, and a mock pricing/payment flow. All persistent state
//! lives behind the REST backend; local state is a cache invalidated by
//! re-fetch.

pub mod api;
pub mod app;
pub mod coach;
pub mod components;
pub mod context;
pub mod forms;
pub mod models;
pub mod store;
