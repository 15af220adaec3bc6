//! Incident workflow errors

use thiserror::Error;

use crate::availability::ActionKind;
use crate::incident::Queue;

/// Errors that can occur in the incident workflow
///
/// All kinds are non-fatal and locally recoverable by the caller; there is
/// no transient-failure class, so retrying is never appropriate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncidentError {
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: Queue, to: Queue },

    #[error("{action} is not available from {queue}")]
    ActionNotAvailable { action: ActionKind, queue: Queue },

    #[error("moving to {target} requires settlement fees")]
    SettlementRequired { target: Queue },

    #[error("malformed settlement fees: {0}")]
    MalformedFees(String),
}
