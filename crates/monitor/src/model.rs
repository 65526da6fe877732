//! Resource model for one Datadog monitor
//!
//! Field names follow the CloudFormation resource schema (PascalCase on
//! the wire, `Type` for the monitor type). Every attribute is optional;
//! absence means "not specified", never a default.

use serde::{Deserialize, Serialize};

/// Desired and observed state of one monitor.
///
/// `id` is assigned by Datadog on create and identifies the monitor for
/// Read, Update, and Delete. `multi`, `creator`, `created`, and `modified`
/// are read-only and populated from API responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Ordered list of tags; order is preserved exactly as supplied.
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
    pub options: Option<MonitorOptions>,
}

/// Who created the monitor; read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Creator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Monitor evaluation and notification options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorOptions {
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

    #[serde(rename = "TimeoutH", skip_serializing_if = "Option::is_none")]
    pub timeout_h: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<MonitorThresholds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_windows: Option<MonitorThresholdWindows>,
}

/// Alert thresholds keyed by severity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorThresholds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_recovery: Option<f64>,

    #[serde(rename = "OK", skip_serializing_if = "Option::is_none")]
    pub ok: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_recovery: Option<f64>,
}

/// Evaluation windows for anomaly-detection monitors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorThresholdWindows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_window: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_window: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_cloudformation_shape() {
        let json = r#"{
            "Type": "query alert",
            "Query": "avg(last_5m):avg:system.cpu.user{*} > 90",
            "Tags": ["app:CF", "key2:val2"],
            "Options": {
                "Thresholds": {"Critical": 90.0, "OK": 50.0},
                "NotifyNoData": true,
                "TimeoutH": 10
            }
        }"#;
        let model: MonitorModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.monitor_type.as_deref(), Some("query alert"));
        assert_eq!(
            model.tags,
            Some(vec!["app:CF".to_string(), "key2:val2".to_string()])
        );
        let options = model.options.unwrap();
        assert_eq!(options.notify_no_data, Some(true));
        assert_eq!(options.timeout_h, Some(10));
        let thresholds = options.thresholds.unwrap();
        assert_eq!(thresholds.critical, Some(90.0));
        assert_eq!(thresholds.ok, Some(50.0));
        assert_eq!(thresholds.warning, None);
    }

    #[test]
    fn test_unset_fields_stay_absent_in_json() {
        let model = MonitorModel {
            query: Some("q".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#"{"Query":"q"}"#);
    }
}
