pub mod service;

pub use service::{AdminService, DashboardStats, UpdateSettingsRequest};
