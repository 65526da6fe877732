//! Field mapping between the resource model and the AWS integration wire shapes
//!
//! Mapping is total and order-independent; unset optional fields stay
//! unset in both directions.

use crate::api::{AwsAccount, AwsAccountDeleteRequest, AwsAccountFilter};
use crate::model::AwsIntegrationModel;

/// Build the request payload for create and update calls.
pub fn model_to_account(model: &AwsIntegrationModel) -> AwsAccount {
    AwsAccount {
        account_id: model.account_id.clone(),
        role_name: model.role_name.clone(),
        access_key_id: model.access_key_id.clone(),
        host_tags: model.host_tags.clone(),
        filter_tags: model.filter_tags.clone(),
        account_specific_namespace_rules: model.account_specific_namespace_rules.clone(),
    }
}

/// Overwrite the model with the record the API returned.
///
/// `external_id` is not echoed by the list endpoint and is left alone.
pub fn apply_account(model: &mut AwsIntegrationModel, account: &AwsAccount) {
    model.account_id = account.account_id.clone();
    model.role_name = account.role_name.clone();
    model.access_key_id = account.access_key_id.clone();
    model.host_tags = account.host_tags.clone();
    model.filter_tags = account.filter_tags.clone();
    model.account_specific_namespace_rules = account.account_specific_namespace_rules.clone();
}

/// Query filter identifying the record the model describes.
pub fn identity_filter(model: &AwsIntegrationModel) -> AwsAccountFilter {
    AwsAccountFilter {
        account_id: model.account_id.clone(),
        role_name: model.role_name.clone(),
        access_key_id: model.access_key_id.clone(),
    }
}

/// Request body for the delete call.
pub fn delete_request(model: &AwsIntegrationModel) -> AwsAccountDeleteRequest {
    AwsAccountDeleteRequest {
        account_id: model.account_id.clone(),
        role_name: model.role_name.clone(),
        access_key_id: model.access_key_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn sample_model() -> AwsIntegrationModel {
        AwsIntegrationModel {
            account_id: Some("123456789012".to_string()),
            role_name: Some("DatadogIntegrationRole".to_string()),
            access_key_id: None,
            host_tags: Some(vec!["env:prod".to_string(), "team:infra".to_string()]),
            filter_tags: Some(vec!["datadog:monitored".to_string()]),
            account_specific_namespace_rules: Some(HashMap::from([(
                "auto_scaling".to_string(),
                false,
            )])),
            external_id: None,
        }
    }

    #[test]
    fn test_round_trip_is_identity_for_echoed_fields() {
        let model = sample_model();
        let account = model_to_account(&model);

        let mut mirrored = model.clone();
        apply_account(&mut mirrored, &account);
        assert_eq!(mirrored, model);
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let model = AwsIntegrationModel::default();
        let account = model_to_account(&model);
        assert_eq!(serde_json::to_string(&account).unwrap(), "{}");

        let mut applied = sample_model();
        apply_account(&mut applied, &AwsAccount::default());
        assert_eq!(applied.host_tags, None);
        assert_eq!(applied.account_id, None);
    }

    #[test]
    fn test_apply_account_preserves_external_id() {
        let mut model = sample_model();
        model.external_id = Some("abc123".to_string());
        apply_account(&mut model, &model_to_account(&sample_model()));
        assert_eq!(model.external_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_identity_filter_uses_natural_key() {
        let filter = identity_filter(&sample_model());
        assert_eq!(filter.account_id.as_deref(), Some("123456789012"));
        assert_eq!(filter.role_name.as_deref(), Some("DatadogIntegrationRole"));
        assert_eq!(filter.access_key_id, None);
    }
}
