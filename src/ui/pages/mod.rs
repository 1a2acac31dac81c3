pub mod breakdown;
pub mod planner;
pub mod settings;

pub use breakdown::BreakdownPage;
pub use planner::PlannerPage;
pub use settings::SettingsPage;
