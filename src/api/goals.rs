//! Goal Endpoints
//!
//! List, fetch, create, update, and delete goals.

use serde::Serialize;

use super::{check_status, log_error, ApiClient, ApiError};
use crate::models::{Goal, GoalStatus};

/// Body for `POST /api/goals`. Blank description/plan and an empty task
/// list are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    pub category_id: u32,
    pub target_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
}

/// Partial body for `PUT /api/goals/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
}

impl GoalPatch {
    pub fn status(status: GoalStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl ApiClient {
    /// `GET /api/goals`. Returns an empty list on any failure.
    pub async fn get_all_goals(&self) -> Vec<Goal> {
        match self.fetch_goals().await {
            Ok(goals) => goals,
            Err(err) => {
                log_error(&format!("Error fetching goals: {err}"));
                Vec::new()
            }
        }
    }

    async fn fetch_goals(&self) -> Result<Vec<Goal>, ApiError> {
        let response = self.http().get(self.url("/api/goals")).send().await?;
        check_status(&response)?;
        Ok(response.json().await?)
    }

    /// `GET /api/goals/{id}`. Unlike the list read this propagates: there
    /// is no meaningful default for one specific goal.
    pub async fn get_goal_by_id(&self, id: u32) -> Result<Goal, ApiError> {
        let response = self
            .http()
            .get(self.url(&format!("/api/goals/{id}")))
            .send()
            .await?;
        check_status(&response)?;
        Ok(response.json().await?)
    }

    /// `POST /api/goals`.
    pub async fn create_goal(&self, goal: &NewGoal) -> Result<(), ApiError> {
        let response = self
            .http()
            .post(self.url("/api/goals"))
            .json(goal)
            .send()
            .await?;
        check_status(&response)
    }

    /// `PUT /api/goals/{id}`.
    pub async fn update_goal(&self, id: u32, patch: &GoalPatch) -> Result<(), ApiError> {
        let response = self
            .http()
            .put(self.url(&format!("/api/goals/{id}")))
            .json(patch)
            .send()
            .await?;
        check_status(&response)
    }

    /// `DELETE /api/goals/{id}`.
    pub async fn delete_goal(&self, id: u32) -> Result<(), ApiError> {
        let response = self
            .http()
            .delete(self.url(&format!("/api/goals/{id}")))
            .send()
            .await?;
        check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_goal_omits_blank_optional_fields() {
        let body = NewGoal {
            title: "Run a marathon".to_string(),
            description: None,
            plan: None,
            category_id: 1,
            target_date: "2030-06-01T00:00:00".to_string(),
            tasks: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Run a marathon",
                "categoryId": 1,
                "targetDate": "2030-06-01T00:00:00"
            })
        );
    }

    #[test]
    fn status_patch_serializes_only_the_status() {
        let json = serde_json::to_value(GoalPatch::status(GoalStatus::Completed)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "Completed" }));
    }
}
