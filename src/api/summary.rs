//! Dashboard Summary Endpoint

use super::{check_status, log_error, ApiClient, ApiError};
use crate::models::DashboardSummary;

impl ApiClient {
    /// `GET /api/summary`. Returns the zeroed default when the backend is
    /// unavailable so the dashboard always renders.
    pub async fn get_dashboard_summary(&self) -> DashboardSummary {
        match self.fetch_summary().await {
            Ok(summary) => summary,
            Err(err) => {
                log_error(&format!("Error fetching dashboard summary: {err}"));
                DashboardSummary::default()
            }
        }
    }

    async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        let response = self.http().get(self.url("/api/summary")).send().await?;
        check_status(&response)?;
        Ok(response.json().await?)
    }
}
