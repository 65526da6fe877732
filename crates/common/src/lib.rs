//! ddcfn Common Library
//!
//! Shared types, API client construction, and the progress envelope for
//! the Datadog CloudFormation resource handlers.

pub mod client;
pub mod credentials;
pub mod error;
pub mod handler;
pub mod progress;

// Re-export commonly used types
pub use client::ApiClient;
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use handler::{failure_message, Action, ResourceHandlerRequest};
pub use progress::{ErrorCode, OperationStatus, ProgressEvent};

/// ddcfn version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Datadog API endpoint used when credentials carry no URL
pub const DEFAULT_API_URL: &str = "https://api.datadoghq.com";

/// Initialize logging for a handler process.
///
/// Reads the filter from `RUST_LOG` and falls back to `info`. Safe to
/// call more than once (later calls are no-ops), which matters for tests.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
