//! CRUD handlers for the monitor resource
//!
//! Each handler performs exactly one remote call and always returns a
//! progress envelope; remote errors never propagate raw. Handlers are
//! stateless across invocations and are not idempotent: calling Create
//! twice creates two monitors.

use tracing::{error, info};

use ddcfn_common::{
    failure_message, Action, Credentials, Error, ProgressEvent, ResourceHandlerRequest,
};

use crate::api::{MonitorApi, MonitorsClient};
use crate::mapper;
use crate::model::MonitorModel;

const ENTITY: &str = "Monitor";

/// Build an HTTP-backed client from the supplied credentials and dispatch
/// one lifecycle action. Client-construction errors also become FAILED
/// envelopes.
pub async fn handle_request(
    credentials: &Credentials,
    action: Action,
    request: ResourceHandlerRequest<MonitorModel>,
) -> ProgressEvent<MonitorModel> {
    let client = match MonitorsClient::new(credentials) {
        Ok(client) => client,
        Err(e) => {
            let message = failure_message(action, ENTITY, &e);
            error!("{}", message);
            return ProgressEvent::failed(request.desired_resource_state, message);
        }
    };
    handle(&client, action, request).await
}

/// Dispatch one lifecycle action against any API implementation.
pub async fn handle<A: MonitorApi + Sync>(
    api: &A,
    action: Action,
    request: ResourceHandlerRequest<MonitorModel>,
) -> ProgressEvent<MonitorModel> {
    let model = request.desired_resource_state.unwrap_or_default();
    match action {
        Action::Create => create(api, model).await,
        Action::Read => read(api, model).await,
        Action::Update => update(api, model).await,
        Action::Delete => delete(api, model).await,
        Action::List => list(api, model).await,
    }
}

pub async fn create<A: MonitorApi + Sync>(
    api: &A,
    mut model: MonitorModel,
) -> ProgressEvent<MonitorModel> {
    info!(monitor_type = ?model.monitor_type, "creating monitor");

    let monitor = mapper::model_to_monitor(&model);
    match api.create_monitor(&monitor).await {
        Ok(created) => {
            mapper::apply_monitor(&mut model, &created);
            ProgressEvent::success(model)
        }
        Err(e) => {
            let message = failure_message(Action::Create, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

pub async fn read<A: MonitorApi + Sync>(
    api: &A,
    mut model: MonitorModel,
) -> ProgressEvent<MonitorModel> {
    info!(id = ?model.id, "reading monitor");

    let Some(id) = model.id else {
        return missing_id(Action::Read, model);
    };

    match api.get_monitor(id).await {
        Ok(monitor) => {
            mapper::apply_monitor(&mut model, &monitor);
            ProgressEvent::success(model)
        }
        Err(e) => {
            let message = failure_message(Action::Read, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

pub async fn update<A: MonitorApi + Sync>(
    api: &A,
    mut model: MonitorModel,
) -> ProgressEvent<MonitorModel> {
    info!(id = ?model.id, "updating monitor");

    let Some(id) = model.id else {
        return missing_id(Action::Update, model);
    };

    let monitor = mapper::model_to_monitor(&model);
    match api.update_monitor(id, &monitor).await {
        Ok(updated) => {
            mapper::apply_monitor(&mut model, &updated);
            ProgressEvent::success(model)
        }
        Err(e) => {
            let message = failure_message(Action::Update, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

/// Delete the monitor. On success no model is attached; the monitor and
/// the model cease to exist together.
pub async fn delete<A: MonitorApi + Sync>(
    api: &A,
    model: MonitorModel,
) -> ProgressEvent<MonitorModel> {
    info!(id = ?model.id, "deleting monitor");

    let Some(id) = model.id else {
        return missing_id(Action::Delete, model);
    };

    match api.delete_monitor(id).await {
        Ok(_) => ProgressEvent::deleted(),
        Err(e) => {
            let message = failure_message(Action::Delete, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

/// List every monitor, one model per remote entity.
pub async fn list<A: MonitorApi + Sync>(
    api: &A,
    model: MonitorModel,
) -> ProgressEvent<MonitorModel> {
    info!("listing monitors");

    match api.list_monitors().await {
        Ok(monitors) => {
            ProgressEvent::success_list(monitors.iter().map(mapper::monitor_to_model).collect())
        }
        Err(e) => {
            let message = failure_message(Action::List, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

fn missing_id(action: Action, model: MonitorModel) -> ProgressEvent<MonitorModel> {
    let e = Error::MissingAttribute("Id");
    let message = failure_message(action, ENTITY, &e);
    error!("{}", message);
    ProgressEvent::failed(Some(model), message)
}
