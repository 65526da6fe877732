//! Field mapping between the resource model and the monitor wire shapes
//!
//! Mapping is total and order-independent; no field derives its value from
//! another, and unset optional fields stay unset in both directions.
//! Requests carry only fields the API accepts: identity travels in the URL
//! path and the read-only fields (`multi`, `creator`, timestamps) are
//! never sent.

use crate::api;
use crate::model::{
    Creator, MonitorModel, MonitorOptions, MonitorThresholdWindows, MonitorThresholds,
};

/// Build the request payload for create and update calls.
pub fn model_to_monitor(model: &MonitorModel) -> api::Monitor {
    api::Monitor {
        id: None,
        monitor_type: model.monitor_type.clone(),
        name: model.name.clone(),
        query: model.query.clone(),
        message: model.message.clone(),
        tags: model.tags.clone(),
        multi: None,
        creator: None,
        created: None,
        modified: None,
        options: model.options.as_ref().map(options_to_wire),
    }
}

/// Overwrite the model with the monitor the API returned.
pub fn apply_monitor(model: &mut MonitorModel, monitor: &api::Monitor) {
    model.id = monitor.id;
    model.monitor_type = monitor.monitor_type.clone();
    model.name = monitor.name.clone();
    model.query = monitor.query.clone();
    model.message = monitor.message.clone();
    model.tags = monitor.tags.clone();
    model.multi = monitor.multi;
    model.creator = monitor.creator.as_ref().map(creator_to_model);
    model.created = monitor.created.clone();
    model.modified = monitor.modified.clone();
    model.options = monitor.options.as_ref().map(options_to_model);
}

/// Build a fresh model from one listed monitor.
pub fn monitor_to_model(monitor: &api::Monitor) -> MonitorModel {
    let mut model = MonitorModel::default();
    apply_monitor(&mut model, monitor);
    model
}

fn options_to_wire(options: &MonitorOptions) -> api::Options {
    api::Options {
        aggregation: options.aggregation.clone(),
        enable_logs_sample: options.enable_logs_sample,
        escalation_message: options.escalation_message.clone(),
        evaluation_delay: options.evaluation_delay,
        include_tags: options.include_tags,
        locked: options.locked,
        min_location_failed: options.min_location_failed,
        new_host_delay: options.new_host_delay,
        no_data_timeframe: options.no_data_timeframe,
        notify_audit: options.notify_audit,
        notify_no_data: options.notify_no_data,
        renotify_interval: options.renotify_interval,
        require_full_window: options.require_full_window,
        timeout_h: options.timeout_h,
        thresholds: options.thresholds.as_ref().map(thresholds_to_wire),
        threshold_windows: options
            .threshold_windows
            .as_ref()
            .map(threshold_windows_to_wire),
    }
}

fn options_to_model(options: &api::Options) -> MonitorOptions {
    MonitorOptions {
        aggregation: options.aggregation.clone(),
        enable_logs_sample: options.enable_logs_sample,
        escalation_message: options.escalation_message.clone(),
        evaluation_delay: options.evaluation_delay,
        include_tags: options.include_tags,
        locked: options.locked,
        min_location_failed: options.min_location_failed,
        new_host_delay: options.new_host_delay,
        no_data_timeframe: options.no_data_timeframe,
        notify_audit: options.notify_audit,
        notify_no_data: options.notify_no_data,
        renotify_interval: options.renotify_interval,
        require_full_window: options.require_full_window,
        timeout_h: options.timeout_h,
        thresholds: options.thresholds.as_ref().map(thresholds_to_model),
        threshold_windows: options
            .threshold_windows
            .as_ref()
            .map(threshold_windows_to_model),
    }
}

fn thresholds_to_wire(thresholds: &MonitorThresholds) -> api::Thresholds {
    api::Thresholds {
        critical: thresholds.critical,
        critical_recovery: thresholds.critical_recovery,
        ok: thresholds.ok,
        warning: thresholds.warning,
        warning_recovery: thresholds.warning_recovery,
    }
}

fn thresholds_to_model(thresholds: &api::Thresholds) -> MonitorThresholds {
    MonitorThresholds {
        critical: thresholds.critical,
        critical_recovery: thresholds.critical_recovery,
        ok: thresholds.ok,
        warning: thresholds.warning,
        warning_recovery: thresholds.warning_recovery,
    }
}

fn threshold_windows_to_wire(windows: &MonitorThresholdWindows) -> api::ThresholdWindows {
    api::ThresholdWindows {
        trigger_window: windows.trigger_window.clone(),
        recovery_window: windows.recovery_window.clone(),
    }
}

fn threshold_windows_to_model(windows: &api::ThresholdWindows) -> MonitorThresholdWindows {
    MonitorThresholdWindows {
        trigger_window: windows.trigger_window.clone(),
        recovery_window: windows.recovery_window.clone(),
    }
}

fn creator_to_model(creator: &api::Creator) -> Creator {
    Creator {
        name: creator.name.clone(),
        handle: creator.handle.clone(),
        email: creator.email.clone(),
    }
}
