//! Resource model for one Datadog AWS account integration

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Desired and observed state of one AWS account integration record.
///
/// The natural key is the (`account_id`, `role_name`) pair for role-based
/// integrations, or `access_key_id` for key-based ones. `external_id` is
/// assigned by Datadog on create. After any successful Create, Read, or
/// Update the model mirrors the remote record; it is never authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsIntegrationModel {
    #[serde(rename = "AccountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    #[serde(rename = "AccessKeyID", skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_specific_namespace_rules: Option<HashMap<String, bool>>,

    /// Assigned by Datadog when the integration is created; read-only.
    #[serde(rename = "ExternalID", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}
