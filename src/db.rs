pub mod store;
pub use store::{DashboardStore, DynDashboardStore};
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
