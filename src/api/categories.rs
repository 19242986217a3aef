//! Category Endpoint
//!
//! Categories are immutable reference data, fetched once per session.

use super::{check_status, log_error, ApiClient, ApiError};
use crate::models::Category;

impl ApiClient {
    /// `GET /api/categories`. Falls back to the fixed built-in set when
    /// the backend is unavailable.
    pub async fn get_all_categories(&self) -> Vec<Category> {
        match self.fetch_categories().await {
            Ok(categories) => categories,
            Err(err) => {
                log_error(&format!("Error fetching categories: {err}"));
                Category::fallback()
            }
        }
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self.http().get(self.url("/api/categories")).send().await?;
        check_status(&response)?;
        Ok(response.json().await?)
    }
}
