//! Terminal outcomes of the two request flows.
//!
//! Classification is kept free of GUI and network concerns so every branch
//! of the contract can be exercised directly in tests.

use crate::api::client::ApiError;
use crate::api::model::ServerReply;

/// What the UI does once an order submission finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the order; discard view state and start over.
    Reload,
    /// Server answered but did not report success.
    Rejected,
    /// The request itself failed (network error, non-JSON body, ...).
    Failed(String),
}

/// Classify a finished order submission.
pub fn submit_outcome(result: Result<ServerReply, ApiError>) -> SubmitOutcome {
    match result {
        Ok(reply) if reply.success => SubmitOutcome::Reload,
        Ok(_) => SubmitOutcome::Rejected,
        Err(e) => SubmitOutcome::Failed(e.to_string()),
    }
}

/// What the UI reports once a transfer request finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Succeeded,
    Failed,
    /// The request itself failed; carries the diagnostic message.
    Errored(String),
}

/// Classify a finished transfer request.
pub fn transfer_outcome(result: Result<ServerReply, ApiError>) -> TransferOutcome {
    match result {
        Ok(reply) if reply.success => TransferOutcome::Succeeded,
        Ok(_) => TransferOutcome::Failed,
        Err(e) => TransferOutcome::Errored(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;

    fn transport_error() -> ApiError {
        ApiError::from(Url::parse("::not-a-url::").unwrap_err())
    }

    fn reply(success: bool) -> ServerReply {
        ServerReply { success }
    }

    #[test]
    fn accepted_order_reloads() {
        assert_eq!(submit_outcome(Ok(reply(true))), SubmitOutcome::Reload);
    }

    #[test]
    fn rejected_order_alerts_without_reload() {
        assert_eq!(submit_outcome(Ok(reply(false))), SubmitOutcome::Rejected);
    }

    #[test]
    fn transport_failure_is_distinct_from_rejection() {
        match submit_outcome(Err(transport_error())) {
            SubmitOutcome::Failed(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn transfer_mirrors_the_submit_contract() {
        assert_eq!(
            transfer_outcome(Ok(reply(true))),
            TransferOutcome::Succeeded
        );
        assert_eq!(transfer_outcome(Ok(reply(false))), TransferOutcome::Failed);
        assert!(matches!(
            transfer_outcome(Err(transport_error())),
            TransferOutcome::Errored(_)
        ));
    }
}
