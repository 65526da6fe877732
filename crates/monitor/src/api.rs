//! Narrow client surface for the Datadog monitor API
//!
//! Wire types mirror the JSON the API accepts and returns (snake_case,
//! `type` for the monitor type). The [`MonitorApi`] trait is the seam
//! between the handlers and the transport; tests substitute an in-memory
//! fake.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use ddcfn_common::{ApiClient, Credentials, Result};

const MONITOR_PATH: &str = "api/v1/monitor";

/// Wire shape of one monitor definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_logs_sample: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_delay: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tags: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_location_failed: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_host_delay: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_data_timeframe: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_audit: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_no_data: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub renotify_interval: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_full_window: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_h: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_windows: Option<ThresholdWindows>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_recovery: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_recovery: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdWindows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_window: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_window: Option<String>,
}

/// Response body of `DELETE /api/v1/monitor/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeletedMonitor {
    pub deleted_monitor_id: Option<i64>,
}

/// Capability interface the handlers require from the monitor API
#[async_trait]
pub trait MonitorApi {
    async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor>;

    async fn get_monitor(&self, id: i64) -> Result<Monitor>;

    async fn update_monitor(&self, id: i64, monitor: &Monitor) -> Result<Monitor>;

    async fn delete_monitor(&self, id: i64) -> Result<DeletedMonitor>;

    async fn list_monitors(&self) -> Result<Vec<Monitor>>;
}

/// HTTP-backed implementation used by the live handlers
#[derive(Debug, Clone)]
pub struct MonitorsClient {
    api: ApiClient,
}

impl MonitorsClient {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(credentials)?,
        })
    }
}

#[async_trait]
impl MonitorApi for MonitorsClient {
    async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor> {
        self.api
            .send_json(Method::POST, MONITOR_PATH, &[], monitor)
            .await
    }

    async fn get_monitor(&self, id: i64) -> Result<Monitor> {
        self.api
            .get_json(&format!("{}/{}", MONITOR_PATH, id), &[])
            .await
    }

    async fn update_monitor(&self, id: i64, monitor: &Monitor) -> Result<Monitor> {
        self.api
            .send_json(Method::PUT, &format!("{}/{}", MONITOR_PATH, id), &[], monitor)
            .await
    }

    async fn delete_monitor(&self, id: i64) -> Result<DeletedMonitor> {
        self.api
            .delete_json(&format!("{}/{}", MONITOR_PATH, id))
            .await
    }

    async fn list_monitors(&self) -> Result<Vec<Monitor>> {
        self.api.get_json(MONITOR_PATH, &[]).await
    }
}
