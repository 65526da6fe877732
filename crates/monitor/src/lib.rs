//! Datadog Monitor resource handler
//!
//! Maps CloudFormation lifecycle actions onto the Datadog monitor API
//! (`/api/v1/monitor`).

pub mod api;
pub mod handlers;
pub mod mapper;
pub mod model;

pub use handlers::{create, delete, handle, handle_request, list, read, update};
pub use model::{
    Creator, MonitorModel, MonitorOptions, MonitorThresholdWindows, MonitorThresholds,
};
