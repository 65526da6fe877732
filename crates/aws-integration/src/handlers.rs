//! CRUD handlers for the AWS account integration resource
//!
//! Each handler performs at most two remote calls and always returns a
//! progress envelope; remote errors never propagate raw.

use tracing::{error, info};

use ddcfn_common::{
    failure_message, Action, Credentials, Error, ProgressEvent, ResourceHandlerRequest,
};

use crate::api::{AwsIntegrationApi, AwsIntegrationClient};
use crate::mapper;
use crate::model::AwsIntegrationModel;

const ENTITY: &str = "AWS Integration Account";

/// Build an HTTP-backed client from the supplied credentials and dispatch
/// one lifecycle action. Client-construction errors also become FAILED
/// envelopes.
pub async fn handle_request(
    credentials: &Credentials,
    action: Action,
    request: ResourceHandlerRequest<AwsIntegrationModel>,
) -> ProgressEvent<AwsIntegrationModel> {
    let client = match AwsIntegrationClient::new(credentials) {
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
pub async fn handle<A: AwsIntegrationApi + Sync>(
    api: &A,
    action: Action,
    request: ResourceHandlerRequest<AwsIntegrationModel>,
) -> ProgressEvent<AwsIntegrationModel> {
    let model = request.desired_resource_state.unwrap_or_default();
    match action {
        Action::Create => create(api, model).await,
        Action::Read => read(api, model).await,
        Action::Update => update(api, model).await,
        Action::Delete => delete(api, model).await,
        Action::List => list(api, model).await,
    }
}

/// Register the AWS account with Datadog. The create response carries only
/// the assigned external ID; every other field already mirrors the request.
pub async fn create<A: AwsIntegrationApi + Sync>(
    api: &A,
    mut model: AwsIntegrationModel,
) -> ProgressEvent<AwsIntegrationModel> {
    info!(account_id = ?model.account_id, "creating AWS integration account");

    let account = mapper::model_to_account(&model);
    match api.create_account(&account).await {
        Ok(response) => {
            model.external_id = response.external_id;
            ProgressEvent::success(model)
        }
        Err(e) => {
            let message = failure_message(Action::Create, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

/// Look the account up by its natural key. The API may return several
/// candidates; the first entry is taken in the order the API reports them.
pub async fn read<A: AwsIntegrationApi + Sync>(
    api: &A,
    mut model: AwsIntegrationModel,
) -> ProgressEvent<AwsIntegrationModel> {
    info!(account_id = ?model.account_id, "reading AWS integration account");

    let accounts = match api.get_all_accounts(&mapper::identity_filter(&model)).await {
        Ok(accounts) => accounts,
        Err(e) => {
            let message = failure_message(Action::Read, ENTITY, &e);
            error!("{}", message);
            return ProgressEvent::failed(Some(model), message);
        }
    };

    match accounts.first() {
        Some(account) => {
            mapper::apply_account(&mut model, account);
            ProgressEvent::success(model)
        }
        None => {
            let e = Error::EmptyResult {
                kind: ENTITY.to_string(),
            };
            let message = failure_message(Action::Read, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

/// Update the record, then read it back: the update response carries no
/// body, and the model must mirror what the server stored.
pub async fn update<A: AwsIntegrationApi + Sync>(
    api: &A,
    mut model: AwsIntegrationModel,
) -> ProgressEvent<AwsIntegrationModel> {
    info!(account_id = ?model.account_id, "updating AWS integration account");

    let filter = mapper::identity_filter(&model);
    let account = mapper::model_to_account(&model);
    if let Err(e) = api.update_account(&filter, &account).await {
        let message = failure_message(Action::Update, ENTITY, &e);
        error!("{}", message);
        return ProgressEvent::failed(Some(model), message);
    }

    match api.get_all_accounts(&filter).await {
        Ok(accounts) => match accounts.first() {
            Some(account) => {
                mapper::apply_account(&mut model, account);
                ProgressEvent::success(model)
            }
            None => {
                let e = Error::EmptyResult {
                    kind: ENTITY.to_string(),
                };
                let message = failure_message(Action::Update, ENTITY, &e);
                error!("{}", message);
                ProgressEvent::failed(Some(model), message)
            }
        },
        Err(e) => {
            let message = failure_message(Action::Update, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

/// Remove the integration. On success no model is attached; the record and
/// the model cease to exist together.
pub async fn delete<A: AwsIntegrationApi + Sync>(
    api: &A,
    model: AwsIntegrationModel,
) -> ProgressEvent<AwsIntegrationModel> {
    info!(account_id = ?model.account_id, "deleting AWS integration account");

    match api.delete_account(&mapper::delete_request(&model)).await {
        Ok(()) => ProgressEvent::deleted(),
        Err(e) => {
            let message = failure_message(Action::Delete, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}

/// List every integration record, one model per remote entity.
pub async fn list<A: AwsIntegrationApi + Sync>(
    api: &A,
    model: AwsIntegrationModel,
) -> ProgressEvent<AwsIntegrationModel> {
    info!("listing AWS integration accounts");

    match api.get_all_accounts(&Default::default()).await {
        Ok(accounts) => {
            let models = accounts
                .iter()
                .map(|account| {
                    let mut model = AwsIntegrationModel::default();
                    mapper::apply_account(&mut model, account);
                    model
                })
                .collect();
            ProgressEvent::success_list(models)
        }
        Err(e) => {
            let message = failure_message(Action::List, ENTITY, &e);
            error!("{}", message);
            ProgressEvent::failed(Some(model), message)
        }
    }
}
