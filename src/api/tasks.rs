//! Task Endpoints
//!
//! Tasks only exist under their parent goal; every path is scoped by
//! goal id.

use serde::Serialize;

use super::{check_status, ApiClient, ApiError};

/// Body for `POST /api/goals/{id}/tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub description: String,
}

/// Partial body for `PUT /api/goals/{id}/tasks/{taskId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Self::default()
        }
    }
}

impl ApiClient {
    /// `POST /api/goals/{goalId}/tasks`.
    pub async fn add_task_to_goal(&self, goal_id: u32, task: &NewTask) -> Result<(), ApiError> {
        let response = self
            .http()
            .post(self.url(&format!("/api/goals/{goal_id}/tasks")))
            .json(task)
            .send()
            .await?;
        check_status(&response)
    }

    /// `PUT /api/goals/{goalId}/tasks/{taskId}`.
    pub async fn update_task(
        &self,
        goal_id: u32,
        task_id: u32,
        patch: &TaskPatch,
    ) -> Result<(), ApiError> {
        let response = self
            .http()
            .put(self.url(&format!("/api/goals/{goal_id}/tasks/{task_id}")))
            .json(patch)
            .send()
            .await?;
        check_status(&response)
    }

    /// `DELETE /api/goals/{goalId}/tasks/{taskId}`.
    pub async fn delete_task(&self, goal_id: u32, task_id: u32) -> Result<(), ApiError> {
        let response = self
            .http()
            .delete(self.url(&format!("/api/goals/{goal_id}/tasks/{task_id}")))
            .send()
            .await?;
        check_status(&response)
    }
}
