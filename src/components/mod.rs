//! UI Components
//!
//! One Leptos component per page, plus shared widgets.

pub(crate) mod ai_coach;
mod ai_coach_page;
mod congratulations_page;
mod create_goal_page;
mod dashboard;
mod delete_confirm_button;
mod goal_view_page;
mod goals_page;
mod payment_page;
mod pricing_page;
mod settings_page;
mod sidebar;

pub use ai_coach::AiCoach;
pub use ai_coach_page::AiCoachPage;
pub use congratulations_page::CongratulationsPage;
pub use create_goal_page::CreateGoalPage;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use goal_view_page::GoalViewPage;
pub use goals_page::GoalsPage;
pub use payment_page::PaymentPage;
pub use pricing_page::PricingPage;
pub use settings_page::SettingsPage;
pub use sidebar::Sidebar;
