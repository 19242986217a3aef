//! Frontend Models
//!
//! Data structures matching backend JSON (camelCase on the wire).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Goal lifecycle status. Any status may be set to any other; the
/// ordering NotStarted -> InProgress -> {Completed, Failed} is not
/// enforced anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 4] = [
        GoalStatus::NotStarted,
        GoalStatus::InProgress,
        GoalStatus::Completed,
        GoalStatus::Failed,
    ];

    /// Wire name, as the backend serializes it.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "NotStarted",
            GoalStatus::InProgress => "InProgress",
            GoalStatus::Completed => "Completed",
            GoalStatus::Failed => "Failed",
        }
    }

    /// Parse the wire name back; used by the status `<select>`.
    pub fn parse(raw: &str) -> Option<GoalStatus> {
        GoalStatus::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Human-readable label ("NotStarted" -> "Not Started").
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "Not Started",
            GoalStatus::InProgress => "In Progress",
            GoalStatus::Completed => "Completed",
            GoalStatus::Failed => "Failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "status-badge not-started",
            GoalStatus::InProgress => "status-badge in-progress",
            GoalStatus::Completed => "status-badge completed",
            GoalStatus::Failed => "status-badge failed",
        }
    }
}

/// Goal data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub plan: Option<String>,
    pub category_id: u32,
    pub category: Option<String>,
    pub target_date: String,
    pub status: GoalStatus,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub tasks: Option<Vec<GoalTask>>,
    // Derived server-side; never recomputed here.
    pub progress: f64,
    pub total_tasks: u32,
    pub completed_tasks: u32,
}

impl Goal {
    /// Optimistically apply a status change to the local copy.
    pub fn set_status(&mut self, status: GoalStatus) {
        self.status = status;
    }

    /// Optimistically flip one task's completion flag on the local copy.
    /// Derived counts are left untouched; the follow-up re-fetch owns them.
    pub fn set_task_completed(&mut self, task_id: u32, is_completed: bool) {
        if let Some(tasks) = self.tasks.as_mut() {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) {
                task.is_completed = is_completed;
            }
        }
    }
}

/// Task data structure (owned by its parent goal)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTask {
    pub id: u32,
    pub goal_id: u32,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Category reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: Option<String>,
}

impl Category {
    /// Fixed fallback set used when the backend is unreachable.
    pub fn fallback() -> Vec<Category> {
        [
            (1, "Fitness"),
            (2, "Personal Development"),
            (3, "Finance"),
            (4, "Career"),
            (5, "Health"),
            (6, "Learning"),
        ]
        .into_iter()
        .map(|(id, name)| Category {
            id,
            name: Some(name.to_string()),
        })
        .collect()
    }
}

/// Dashboard aggregate, wholly derived server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub goals_completed: u32,
    pub goals_in_progress: u32,
    pub accountability_streak: u32,
    pub overall_progress: f64,
    pub user_name: String,
}

impl Default for DashboardSummary {
    fn default() -> Self {
        Self {
            goals_completed: 0,
            goals_in_progress: 0,
            accountability_streak: 0,
            overall_progress: 0.0,
            user_name: "User".to_string(),
        }
    }
}

/// Render a backend date-time string as e.g. "December 31, 2024".
/// Falls back to the raw string when it does not parse.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %-d, %Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%B %-d, %Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goal_json() -> serde_json::Value {
        serde_json::json!({
            "id": 5,
            "title": "Run a marathon",
            "description": null,
            "plan": "Train 4x a week",
            "categoryId": 1,
            "category": "Fitness",
            "targetDate": "2024-12-31T00:00:00",
            "status": "InProgress",
            "createdAt": "2024-01-02T10:00:00",
            "updatedAt": null,
            "tasks": [
                {
                    "id": 12,
                    "goalId": 5,
                    "description": "Buy running shoes",
                    "isCompleted": false,
                    "createdAt": "2024-01-02T10:00:00",
                    "updatedAt": null
                }
            ],
            "progress": 33.3,
            "totalTasks": 3,
            "completedTasks": 1
        })
    }

    #[test]
    fn goal_deserializes_from_camel_case() {
        let goal: Goal = serde_json::from_value(sample_goal_json()).unwrap();
        assert_eq!(goal.id, 5);
        assert_eq!(goal.category_id, 1);
        assert_eq!(goal.status, GoalStatus::InProgress);
        assert_eq!(goal.description, None);
        let tasks = goal.tasks.unwrap();
        assert_eq!(tasks[0].goal_id, 5);
        assert!(!tasks[0].is_completed);
    }

    #[test]
    fn goal_tasks_may_be_null() {
        let mut json = sample_goal_json();
        json["tasks"] = serde_json::Value::Null;
        let goal: Goal = serde_json::from_value(json).unwrap();
        assert!(goal.tasks.is_none());
    }

    #[test]
    fn status_round_trips_as_pascal_case_strings() {
        for status in GoalStatus::ALL {
            let s = serde_json::to_string(&status).unwrap();
            let back: GoalStatus = serde_json::from_str(&s).unwrap();
            assert_eq!(back, status);
        }
        assert_eq!(
            serde_json::to_string(&GoalStatus::NotStarted).unwrap(),
            "\"NotStarted\""
        );
    }

    #[test]
    fn status_parse_inverts_as_str() {
        for status in GoalStatus::ALL {
            assert_eq!(GoalStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(GoalStatus::parse("Paused"), None);
        assert_eq!(GoalStatus::parse(""), None);
    }

    #[test]
    fn status_labels_are_spaced() {
        assert_eq!(GoalStatus::NotStarted.label(), "Not Started");
        assert_eq!(GoalStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn set_task_completed_touches_only_the_matching_task() {
        let mut goal: Goal = serde_json::from_value(sample_goal_json()).unwrap();
        goal.set_task_completed(12, true);
        assert!(goal.tasks.as_ref().unwrap()[0].is_completed);
        // Derived counts stay whatever the server last said.
        assert_eq!(goal.completed_tasks, 1);

        goal.set_task_completed(999, false);
        assert!(goal.tasks.as_ref().unwrap()[0].is_completed);
    }

    #[test]
    fn set_status_allows_any_transition() {
        let mut goal: Goal = serde_json::from_value(sample_goal_json()).unwrap();
        goal.set_status(GoalStatus::Failed);
        assert_eq!(goal.status, GoalStatus::Failed);
        goal.set_status(GoalStatus::NotStarted);
        assert_eq!(goal.status, GoalStatus::NotStarted);
    }

    #[test]
    fn summary_default_is_zeroed_with_user_placeholder() {
        let summary = DashboardSummary::default();
        assert_eq!(summary.goals_completed, 0);
        assert_eq!(summary.overall_progress, 0.0);
        assert_eq!(summary.user_name, "User");
    }

    #[test]
    fn category_fallback_has_six_entries() {
        let fallback = Category::fallback();
        assert_eq!(fallback.len(), 6);
        assert_eq!(fallback[0].name.as_deref(), Some("Fitness"));
        assert_eq!(fallback[5].name.as_deref(), Some("Learning"));
    }

    #[test]
    fn format_date_handles_backend_shapes() {
        assert_eq!(format_date("2024-12-31T00:00:00"), "December 31, 2024");
        assert_eq!(format_date("2024-06-30"), "June 30, 2024");
        assert_eq!(format_date("not a date"), "not a date");
    }
}
