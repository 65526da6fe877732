//! Per-call Datadog credentials

use serde::{Deserialize, Serialize};

use crate::DEFAULT_API_URL;

/// Datadog API credentials supplied with every handler invocation.
///
/// Immutable and never persisted. The `Debug` implementation redacts
/// both keys so credentials cannot leak through log lines.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    pub api_key: String,
    pub application_key: String,
    #[serde(rename = "ApiURL", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        application_key: impl Into<String>,
        api_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            application_key: application_key.into(),
            api_url,
        }
    }

    /// Base URL for API calls, falling back to the public Datadog endpoint.
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("application_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
