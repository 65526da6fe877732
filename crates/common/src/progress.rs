//! Progress envelope returned by every handler invocation

use serde::{Deserialize, Serialize};

/// Operation status reported back to the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Success,
    Failed,
    InProgress,
}

/// Failure classification carried by FAILED envelopes.
///
/// Every error a handler can surface is a remote-call failure; finer
/// distinctions stay inside [`crate::Error`] and the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    RemoteCallFailure,
}

/// Uniform result of one resource lifecycle invocation.
///
/// Terminal for this design: the handlers shown never chain callbacks, so
/// `InProgress` exists only to complete the envelope contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent<M> {
    Success {
        model: Option<M>,
        models: Option<Vec<M>>,
    },
    Failed {
        model: Option<M>,
        message: String,
        error_code: ErrorCode,
    },
    InProgress {
        model: M,
        callback_delay_seconds: u64,
    },
}

impl<M> ProgressEvent<M> {
    /// Successful operation returning the updated model.
    pub fn success(model: M) -> Self {
        ProgressEvent::Success {
            model: Some(model),
            models: None,
        }
    }

    /// Successful List operation returning one model per remote entity.
    pub fn success_list(models: Vec<M>) -> Self {
        ProgressEvent::Success {
            model: None,
            models: Some(models),
        }
    }

    /// Successful Delete operation; no model is attached.
    pub fn deleted() -> Self {
        ProgressEvent::Success {
            model: None,
            models: None,
        }
    }

    /// Failed operation carrying a human-readable message.
    pub fn failed(model: Option<M>, message: impl Into<String>) -> Self {
        ProgressEvent::Failed {
            model,
            message: message.into(),
            error_code: ErrorCode::RemoteCallFailure,
        }
    }

    pub fn status(&self) -> OperationStatus {
        match self {
            ProgressEvent::Success { .. } => OperationStatus::Success,
            ProgressEvent::Failed { .. } => OperationStatus::Failed,
            ProgressEvent::InProgress { .. } => OperationStatus::InProgress,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == OperationStatus::Success
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ProgressEvent::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ProgressEvent::Failed { error_code, .. } => Some(*error_code),
            _ => None,
        }
    }

    pub fn resource_model(&self) -> Option<&M> {
        match self {
            ProgressEvent::Success { model, .. } => model.as_ref(),
            ProgressEvent::Failed { model, .. } => model.as_ref(),
            ProgressEvent::InProgress { model, .. } => Some(model),
        }
    }

    pub fn resource_models(&self) -> Option<&[M]> {
        match self {
            ProgressEvent::Success { models, .. } => models.as_deref(),
            _ => None,
        }
    }

    /// Delay before the orchestrator should call back; always zero for
    /// the terminal variants.
    pub fn callback_delay_seconds(&self) -> u64 {
        match self {
            ProgressEvent::InProgress {
                callback_delay_seconds,
                ..
            } => *callback_delay_seconds,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_accessors() {
        let event = ProgressEvent::success("model");
        assert_eq!(event.status(), OperationStatus::Success);
        assert_eq!(event.resource_model(), Some(&"model"));
        assert_eq!(event.resource_models(), None);
        assert_eq!(event.message(), None);
        assert_eq!(event.error_code(), None);
        assert_eq!(event.callback_delay_seconds(), 0);
    }

    #[test]
    fn test_failed_envelope_accessors() {
        let event: ProgressEvent<&str> = ProgressEvent::failed(Some("model"), "boom");
        assert_eq!(event.status(), OperationStatus::Failed);
        assert_eq!(event.message(), Some("boom"));
        assert_eq!(event.error_code(), Some(ErrorCode::RemoteCallFailure));
        assert_eq!(event.resource_model(), Some(&"model"));
    }

    #[test]
    fn test_delete_envelope_has_no_model() {
        let event: ProgressEvent<String> = ProgressEvent::deleted();
        assert!(event.is_success());
        assert_eq!(event.resource_model(), None);
    }

    #[test]
    fn test_list_envelope_carries_models() {
        let event = ProgressEvent::success_list(vec![1, 2, 3]);
        assert!(event.is_success());
        assert_eq!(event.resource_models(), Some(&[1, 2, 3][..]));
        assert_eq!(event.resource_model(), None);
    }
}
