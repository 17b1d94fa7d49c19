pub mod dashboard_tab;
pub mod user_role;

pub use dashboard_tab::DashboardTab;
pub use user_role::UserRole;
