//! Incident Workflow Domain
//!
//! This crate implements the challan resolution workflow: the queues an
//! incident moves through, the actions legal from each queue, settlement
//! fee capture, and bulk application over a caller-built selection.
//!
//! # Queue Lifecycle
//!
//! ```text
//! newIncidents -> screening -> agentAssigned -> lawyerAssigned
//!              -> settled | notSettled -> hold | refund
//! ```
//!
//! `hold` and `refund` are also reachable as explicit manual moves from
//! any post-intake queue; `notSettled` may only advance to `refund`.

pub mod availability;
pub mod engine;
pub mod error;
pub mod incident;
pub mod selection;

pub use availability::{available_actions, available_actions_for_set, ActionKind};
pub use engine::{BulkOutcome, IncidentAction, QueueTransitionEngine, TransitionPlan};
pub use error::IncidentError;
pub use incident::{Incident, Queue, SettlementFees};
pub use selection::SelectionCoordinator;
