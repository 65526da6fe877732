//! Narrow client surface for the Datadog AWS integration API
//!
//! The [`AwsIntegrationApi`] trait is the seam between the handlers and
//! the transport; tests substitute an in-memory fake.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use ddcfn_common::{ApiClient, Credentials, Result};

const AWS_INTEGRATION_PATH: &str = "api/v1/integration/aws";

/// Wire shape of one AWS account integration record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_specific_namespace_rules: Option<HashMap<String, bool>>,
}

/// Response body of `GET /api/v1/integration/aws`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsAccountListResponse {
    #[serde(default)]
    pub accounts: Vec<AwsAccount>,
}

/// Response body of `POST /api/v1/integration/aws`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsAccountCreateResponse {
    pub external_id: Option<String>,
}

/// Query parameters identifying one integration record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwsAccountFilter {
    pub account_id: Option<String>,
    pub role_name: Option<String>,
    pub access_key_id: Option<String>,
}

impl AwsAccountFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(account_id) = &self.account_id {
            query.push(("account_id", account_id.clone()));
        }
        if let Some(role_name) = &self.role_name {
            query.push(("role_name", role_name.clone()));
        }
        if let Some(access_key_id) = &self.access_key_id {
            query.push(("access_key_id", access_key_id.clone()));
        }
        query
    }
}

/// Request body of `DELETE /api/v1/integration/aws`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AwsAccountDeleteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
}

/// Capability interface the handlers require from the AWS integration API
#[async_trait]
pub trait AwsIntegrationApi {
    async fn create_account(&self, account: &AwsAccount) -> Result<AwsAccountCreateResponse>;

    /// Returns all integration records matching the filter, in the order
    /// the API reports them.
    async fn get_all_accounts(&self, filter: &AwsAccountFilter) -> Result<Vec<AwsAccount>>;

    async fn update_account(&self, filter: &AwsAccountFilter, account: &AwsAccount) -> Result<()>;

    async fn delete_account(&self, request: &AwsAccountDeleteRequest) -> Result<()>;
}

/// HTTP-backed implementation used by the live handlers
#[derive(Debug, Clone)]
pub struct AwsIntegrationClient {
    api: ApiClient,
}

impl AwsIntegrationClient {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(credentials)?,
        })
    }
}

#[async_trait]
impl AwsIntegrationApi for AwsIntegrationClient {
    async fn create_account(&self, account: &AwsAccount) -> Result<AwsAccountCreateResponse> {
        self.api
            .send_json(Method::POST, AWS_INTEGRATION_PATH, &[], account)
            .await
    }

    async fn get_all_accounts(&self, filter: &AwsAccountFilter) -> Result<Vec<AwsAccount>> {
        let response: AwsAccountListResponse = self
            .api
            .get_json(AWS_INTEGRATION_PATH, &filter.to_query())
            .await?;
        Ok(response.accounts)
    }

    async fn update_account(&self, filter: &AwsAccountFilter, account: &AwsAccount) -> Result<()> {
        // The update response body is an empty object
        let _: serde_json::Value = self
            .api
            .send_json(Method::PUT, AWS_INTEGRATION_PATH, &filter.to_query(), account)
            .await?;
        Ok(())
    }

    async fn delete_account(&self, request: &AwsAccountDeleteRequest) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .send_json(Method::DELETE, AWS_INTEGRATION_PATH, &[], request)
            .await?;
        Ok(())
    }
}
