//! CRUD flow tests for the monitor handlers against an in-memory fake of
//! the Datadog monitor API.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use ddcfn_common::{Action, Error, OperationStatus, ResourceHandlerRequest, Result};
use ddcfn_monitor::api::{Creator, DeletedMonitor, Monitor, MonitorApi};
use ddcfn_monitor::model::{MonitorModel, MonitorOptions, MonitorThresholds};
use ddcfn_monitor::{create, delete, handle, list, read, update};

/// In-memory stand-in for the monitor endpoints, with server-side field
/// assignment (id, timestamps, creator) and partial-edit update semantics.
struct FakeMonitorApi {
    monitors: Mutex<BTreeMap<i64, Monitor>>,
    next_id: Mutex<i64>,
    fail_with: Mutex<Option<String>>,
}

impl FakeMonitorApi {
    fn new() -> Self {
        Self {
            monitors: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(1000),
            fail_with: Mutex::new(None),
        }
    }

    fn fail_every_call(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn check_failure(&self) -> Result<()> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(Error::Api {
                status: 400,
                message,
            });
        }
        Ok(())
    }

    fn not_found(id: i64) -> Error {
        Error::Api {
            status: 404,
            message: format!("Monitor not found: {}", id),
        }
    }
}

#[async_trait]
impl MonitorApi for FakeMonitorApi {
    async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor> {
        self.check_failure()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let mut stored = monitor.clone();
        stored.id = Some(*next_id);
        stored.multi = Some(false);
        stored.creator = Some(Creator {
            name: Some("CF User".to_string()),
            handle: Some("cf@example.com".to_string()),
            email: Some("cf@example.com".to_string()),
        });
        stored.created = Some("2021-01-01T00:00:00Z".to_string());
        stored.modified = Some("2021-01-01T00:00:00Z".to_string());

        self.monitors
            .lock()
            .unwrap()
            .insert(*next_id, stored.clone());
        Ok(stored)
    }

    async fn get_monitor(&self, id: i64) -> Result<Monitor> {
        self.check_failure()?;
        self.monitors
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update_monitor(&self, id: i64, monitor: &Monitor) -> Result<Monitor> {
        self.check_failure()?;
        let mut monitors = self.monitors.lock().unwrap();
        let stored = monitors.get_mut(&id).ok_or_else(|| Self::not_found(id))?;

        // Partial-edit semantics: only fields present in the payload change
        if monitor.name.is_some() {
            stored.name = monitor.name.clone();
        }
        if monitor.monitor_type.is_some() {
            stored.monitor_type = monitor.monitor_type.clone();
        }
        if monitor.query.is_some() {
            stored.query = monitor.query.clone();
        }
        if monitor.message.is_some() {
            stored.message = monitor.message.clone();
        }
        if monitor.tags.is_some() {
            stored.tags = monitor.tags.clone();
        }
        if monitor.options.is_some() {
            stored.options = monitor.options.clone();
        }
        stored.modified = Some("2021-02-01T00:00:00Z".to_string());
        Ok(stored.clone())
    }

    async fn delete_monitor(&self, id: i64) -> Result<DeletedMonitor> {
        self.check_failure()?;
        self.monitors
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(DeletedMonitor {
            deleted_monitor_id: Some(id),
        })
    }

    async fn list_monitors(&self) -> Result<Vec<Monitor>> {
        self.check_failure()?;
        Ok(self.monitors.lock().unwrap().values().cloned().collect())
    }
}

fn desired_model() -> MonitorModel {
    MonitorModel {
        monitor_type: Some("query alert".to_string()),
        query: Some("avg(last_5m):sum:system.net.bytes_rcvd{host:host0} > 100".to_string()),
        tags: Some(vec!["app:CF".to_string(), "key2:val2".to_string()]),
        options: Some(MonitorOptions {
            thresholds: Some(MonitorThresholds {
                critical: Some(100.0),
                ok: Some(50.0),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_monitor_crud_flow() -> anyhow::Result<()> {
    let api = FakeMonitorApi::new();

    // Create: tags, type, and thresholds echo back; id is assigned
    let created = create(&api, desired_model()).await;
    assert_eq!(created.status(), OperationStatus::Success);
    assert_eq!(created.callback_delay_seconds(), 0);
    assert_eq!(created.message(), None);
    assert_eq!(created.resource_models(), None);

    let created_model = created.resource_model().unwrap().clone();
    assert!(created_model.id.is_some());
    assert_eq!(created_model.tags, desired_model().tags);
    let thresholds = created_model
        .options
        .as_ref()
        .and_then(|options| options.thresholds.clone())
        .unwrap();
    assert_eq!(thresholds.critical, Some(100.0));
    assert_eq!(thresholds.ok, Some(50.0));

    // Read by the assigned identity yields the model Create returned
    let read_back = read(&api, created_model.clone()).await;
    assert!(read_back.is_success());
    assert_eq!(read_back.resource_model(), Some(&created_model));

    // Update tags and query; type must stay "query alert"
    let mut model = created_model.clone();
    model.tags = Some(vec!["app:UpdatedCF".to_string()]);
    let updated_query =
        "avg(last_1h):anomalies(avg:system.net.bytes_rcvd{host:host0}, 'basic', 2) >= 1";
    model.query = Some(updated_query.to_string());

    let updated = update(&api, model).await;
    assert_eq!(updated.status(), OperationStatus::Success);

    let updated_model = updated.resource_model().unwrap();
    assert_eq!(updated_model.tags, Some(vec!["app:UpdatedCF".to_string()]));
    assert_eq!(updated_model.query.as_deref(), Some(updated_query));
    assert_eq!(updated_model.monitor_type.as_deref(), Some("query alert"));
    // Thresholds were resent unchanged and come back unchanged
    assert_eq!(
        updated_model
            .options
            .as_ref()
            .and_then(|options| options.thresholds.as_ref())
            .and_then(|thresholds| thresholds.critical),
        Some(100.0)
    );

    // Delete: success with no model attached
    let deleted = delete(&api, updated_model.clone()).await;
    assert!(deleted.is_success());
    assert_eq!(deleted.resource_model(), None);

    // Read after delete fails rather than returning an empty model
    let after_delete = read(&api, updated_model.clone()).await;
    assert_eq!(after_delete.status(), OperationStatus::Failed);
    assert!(after_delete.message().unwrap().contains("Monitor not found"));
    Ok(())
}

#[tokio::test]
async fn test_update_preserves_server_side_fields() -> anyhow::Result<()> {
    let api = FakeMonitorApi::new();
    let created = create(&api, desired_model()).await;
    let created_model = created.resource_model().unwrap().clone();

    let mut model = created_model.clone();
    model.tags = Some(vec!["app:UpdatedCF".to_string()]);
    let updated = update(&api, model).await;
    let updated_model = updated.resource_model().unwrap();

    assert_eq!(updated_model.id, created_model.id);
    assert_eq!(updated_model.creator, created_model.creator);
    assert_eq!(updated_model.created, created_model.created);
    Ok(())
}

#[tokio::test]
async fn test_remote_failures_become_failed_envelopes() -> anyhow::Result<()> {
    let api = FakeMonitorApi::new();
    let created = create(&api, desired_model()).await;
    let model = created.resource_model().unwrap().clone();

    api.fail_every_call("The value provided for parameter 'query' is invalid");

    for action in [Action::Create, Action::Read, Action::Update, Action::Delete] {
        let request = ResourceHandlerRequest::from_desired(model.clone());
        let response = handle(&api, action, request).await;
        assert_eq!(response.status(), OperationStatus::Failed, "{}", action);

        let message = response.message().unwrap();
        assert!(message.contains("is invalid"), "{}", message);
        assert!(message.contains(&format!("Failed to {} Monitor", action.verb())));
        // Model comes back unchanged (Create: equal to desired state)
        assert_eq!(response.resource_model(), Some(&model));
    }
    Ok(())
}

#[tokio::test]
async fn test_list_returns_one_model_per_monitor() -> anyhow::Result<()> {
    let api = FakeMonitorApi::new();
    let first = create(&api, desired_model()).await;

    let mut other = desired_model();
    other.monitor_type = Some("metric alert".to_string());
    let second = create(&api, other).await;

    let response = list(&api, MonitorModel::default()).await;
    assert_eq!(response.status(), OperationStatus::Success);

    let models = response.resource_models().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].id, first.resource_model().unwrap().id);
    assert_eq!(models[1].id, second.resource_model().unwrap().id);
    Ok(())
}

#[tokio::test]
async fn test_operations_without_id_fail_locally() -> anyhow::Result<()> {
    let api = FakeMonitorApi::new();

    for action in [Action::Read, Action::Update, Action::Delete] {
        let request = ResourceHandlerRequest::from_desired(desired_model());
        let response = handle(&api, action, request).await;
        assert_eq!(response.status(), OperationStatus::Failed, "{}", action);
        assert!(response
            .message()
            .unwrap()
            .contains("Missing required attribute: Id"));
    }
    Ok(())
}

#[tokio::test]
async fn test_create_twice_creates_two_monitors() -> anyhow::Result<()> {
    let api = FakeMonitorApi::new();
    let first = create(&api, desired_model()).await;
    let second = create(&api, desired_model()).await;

    assert_ne!(
        first.resource_model().unwrap().id,
        second.resource_model().unwrap().id
    );

    let response = list(&api, MonitorModel::default()).await;
    assert_eq!(response.resource_models().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_dispatch_routes_create_without_id() -> anyhow::Result<()> {
    let api = FakeMonitorApi::new();
    let request = ResourceHandlerRequest::from_desired(desired_model());
    let response = handle(&api, Action::Create, request).await;
    assert!(response.is_success());
    assert!(response.resource_model().unwrap().id.is_some());
    Ok(())
}
