pub mod data;
pub mod health;

pub use data::{insert_data, list_data};
pub use health::{health_check, index, metrics_endpoint, readiness_check};
