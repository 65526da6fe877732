//! Datadog AWS Integration resource handler
//!
//! Maps CloudFormation lifecycle actions onto the Datadog AWS account
//! integration API (`/api/v1/integration/aws`).

pub mod api;
pub mod handlers;
pub mod mapper;
pub mod model;

pub use handlers::{create, delete, handle, handle_request, list, read, update};
pub use model::AwsIntegrationModel;
