//! Create-Goal Form
//!
//! Form state and client-side validation. Validation runs before any
//! network call; `today` is passed in so the rules stay pure (the
//! component reads it from `js_sys::Date`).

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::NewGoal;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a goal title.")]
    MissingTitle,
    #[error("Please select a category.")]
    MissingCategory,
    #[error("Please pick a target date.")]
    MissingTargetDate,
    #[error("Please enter a valid target date.")]
    InvalidTargetDate,
    #[error("Target date cannot be in the past.")]
    PastTargetDate,
}

/// Everything the create-goal page edits, including the task list being
/// assembled and the pending task input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateGoalForm {
    pub title: String,
    pub description: String,
    pub plan: String,
    /// Raw value of the category `<select>`; empty until chosen.
    pub category_id: String,
    /// Raw value of the date input (`YYYY-MM-DD`); empty until chosen.
    pub target_date: String,
    pub tasks: Vec<String>,
    pub new_task: String,
}

impl CreateGoalForm {
    /// Append the pending task input to the task list, if non-blank.
    pub fn add_task(&mut self) {
        let task = self.new_task.trim();
        if !task.is_empty() {
            self.tasks.push(task.to_string());
            self.new_task.clear();
        }
    }

    pub fn remove_task(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
        }
    }

    /// Validate and build the request body. Blank description/plan and an
    /// empty task list are dropped so they are omitted from the JSON.
    /// Today's date itself is an accepted target; only earlier dates are
    /// rejected.
    pub fn validate(&self, today: NaiveDate) -> Result<NewGoal, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        let category_id: u32 = match self.category_id.trim() {
            "" => return Err(FormError::MissingCategory),
            raw => raw.parse().map_err(|_| FormError::MissingCategory)?,
        };

        if self.target_date.trim().is_empty() {
            return Err(FormError::MissingTargetDate);
        }
        let date = NaiveDate::parse_from_str(self.target_date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidTargetDate)?;
        if date < today {
            return Err(FormError::PastTargetDate);
        }

        let non_blank = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Ok(NewGoal {
            title: title.to_string(),
            description: non_blank(&self.description),
            plan: non_blank(&self.plan),
            category_id,
            target_date: format!("{date}T00:00:00"),
            tasks: (!self.tasks.is_empty()).then(|| self.tasks.clone()),
        })
    }
}
