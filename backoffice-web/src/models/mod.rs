pub mod app_state;
pub mod dashboard_state;
