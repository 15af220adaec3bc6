//! Queue transition engine
//!
//! The single authority for state changes on an incident or a batch of
//! incidents. Callers consult [`crate::availability`] before surfacing an
//! action; the engine re-enforces every guard on invocation and never
//! applies a partial mutation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{AgentId, IncidentId, LawyerId};

use crate::availability::{action_permitted, ActionKind};
use crate::error::IncidentError;
use crate::incident::{Incident, Queue, SettlementFees};

/// A requested operation on an incident, shared by row-level and bulk
/// callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum IncidentAction {
    Validate,
    Screen,
    AssignAgent {
        agent_id: AgentId,
    },
    AssignLawyer {
        lawyer_id: LawyerId,
    },
    MoveQueue {
        target: Queue,
        fees: Option<SettlementFees>,
    },
    AddExpense {
        fees: SettlementFees,
    },
}

impl IncidentAction {
    /// The availability kind this action is gated by
    pub fn kind(&self) -> ActionKind {
        match self {
            IncidentAction::Validate => ActionKind::Validate,
            IncidentAction::Screen => ActionKind::Screen,
            IncidentAction::AssignAgent { .. } => ActionKind::AssignAgent,
            IncidentAction::AssignLawyer { .. } => ActionKind::AssignLawyer,
            IncidentAction::MoveQueue { .. } => ActionKind::MoveQueue,
            IncidentAction::AddExpense { .. } => ActionKind::AddExpense,
        }
    }
}

/// Outcome of the first phase of a transition: either ready to commit, or
/// fee capture is required before the move can complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TransitionPlan {
    Ready { target: Queue },
    FeesRequired { target: Queue },
}

impl TransitionPlan {
    /// The queue this plan moves into
    pub fn target(&self) -> Queue {
        match self {
            TransitionPlan::Ready { target } | TransitionPlan::FeesRequired { target } => *target,
        }
    }

    /// True when the caller must capture fees before completing
    pub fn requires_fees(&self) -> bool {
        matches!(self, TransitionPlan::FeesRequired { .. })
    }
}

/// Per-incident outcome of a bulk application
///
/// Success carries the queue the incident ended up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome {
    pub incident_id: IncidentId,
    pub outcome: Result<Queue, IncidentError>,
}

/// Pure decision logic over incident snapshots; holds no state of its own
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueTransitionEngine;

impl QueueTransitionEngine {
    /// Creates the engine
    pub fn new() -> Self {
        Self
    }

    /// Marks a new incident as validated, entering screening
    pub fn validate(&self, incident: &mut Incident) -> Result<(), IncidentError> {
        self.enter_screening(incident, ActionKind::Validate)
    }

    /// Marks a new incident as screened, entering screening
    ///
    /// Screen and validate are alternate entry actions with the same
    /// source and target queue.
    pub fn screen(&self, incident: &mut Incident) -> Result<(), IncidentError> {
        self.enter_screening(incident, ActionKind::Screen)
    }

    fn enter_screening(
        &self,
        incident: &mut Incident,
        action: ActionKind,
    ) -> Result<(), IncidentError> {
        if incident.queue != Queue::NewIncidents {
            warn!(incident = %incident.id, queue = %incident.queue, %action, "entry action rejected");
            return Err(IncidentError::InvalidTransition {
                from: incident.queue,
                to: Queue::Screening,
            });
        }

        incident.queue = Queue::Screening;
        incident.touch();
        debug!(incident = %incident.id, %action, "incident entered screening");
        Ok(())
    }

    /// Assigns a field agent without changing the queue
    pub fn assign_agent(
        &self,
        incident: &mut Incident,
        agent_id: AgentId,
    ) -> Result<(), IncidentError> {
        self.guard_action(incident, ActionKind::AssignAgent)?;

        incident.assigned_agent_id = Some(agent_id);
        incident.touch();
        debug!(incident = %incident.id, agent = %agent_id, "agent assigned");
        Ok(())
    }

    /// Assigns a lawyer without changing the queue
    pub fn assign_lawyer(
        &self,
        incident: &mut Incident,
        lawyer_id: LawyerId,
    ) -> Result<(), IncidentError> {
        self.guard_action(incident, ActionKind::AssignLawyer)?;

        incident.assigned_lawyer_id = Some(lawyer_id);
        incident.touch();
        debug!(incident = %incident.id, lawyer = %lawyer_id, "lawyer assigned");
        Ok(())
    }

    /// Moves an incident to `target`, enforcing fee capture for settlement
    /// targets
    pub fn move_queue(
        &self,
        incident: &mut Incident,
        target: Queue,
        fees: Option<SettlementFees>,
    ) -> Result<(), IncidentError> {
        let plan = self.begin_transition(incident, target)?;
        self.complete_transition(incident, plan, fees)
    }

    /// First phase of a move: validates the guards without mutating and
    /// reports whether fee capture is required
    pub fn begin_transition(
        &self,
        incident: &Incident,
        target: Queue,
    ) -> Result<TransitionPlan, IncidentError> {
        self.guard_action(incident, ActionKind::MoveQueue)?;

        // Once not settled, refund is the only way forward.
        if incident.queue == Queue::NotSettled && target != Queue::Refund {
            return Err(IncidentError::InvalidTransition {
                from: incident.queue,
                to: target,
            });
        }

        // Intake is entry-only; nothing moves back into it.
        if target == Queue::NewIncidents {
            return Err(IncidentError::InvalidTransition {
                from: incident.queue,
                to: target,
            });
        }

        if target.requires_settlement() {
            Ok(TransitionPlan::FeesRequired { target })
        } else {
            Ok(TransitionPlan::Ready { target })
        }
    }

    /// Second phase of a move: applies the planned transition
    ///
    /// The plan is re-derived from the incident's current queue, so a
    /// stale plan cannot bypass the guards.
    pub fn complete_transition(
        &self,
        incident: &mut Incident,
        plan: TransitionPlan,
        fees: Option<SettlementFees>,
    ) -> Result<(), IncidentError> {
        let from = incident.queue;
        let current = self.begin_transition(incident, plan.target())?;

        match current {
            TransitionPlan::FeesRequired { target } => {
                let Some(fees) = fees else {
                    return Err(IncidentError::SettlementRequired { target });
                };
                incident.queue = target;
                incident.settlement_fees = Some(fees);
            }
            TransitionPlan::Ready { target } => {
                incident.queue = target;
                if let Some(fees) = fees {
                    incident.settlement_fees = Some(fees);
                }
            }
        }

        incident.touch();
        debug!(incident = %incident.id, %from, to = %incident.queue, "queue transition applied");
        Ok(())
    }

    /// Records expense fees on an incident without moving it
    ///
    /// Expenses are a running ledger entry, not a workflow step; there is
    /// no queue guard, and recording the same fees twice is idempotent.
    pub fn add_expense(
        &self,
        incident: &mut Incident,
        fees: SettlementFees,
    ) -> Result<(), IncidentError> {
        incident.settlement_fees = Some(fees);
        incident.touch();
        debug!(incident = %incident.id, total = %fees.total(), "expense recorded");
        Ok(())
    }

    /// Applies a tagged action to a single incident
    pub fn apply(
        &self,
        incident: &mut Incident,
        action: &IncidentAction,
    ) -> Result<(), IncidentError> {
        match action {
            IncidentAction::Validate => self.validate(incident),
            IncidentAction::Screen => self.screen(incident),
            IncidentAction::AssignAgent { agent_id } => self.assign_agent(incident, *agent_id),
            IncidentAction::AssignLawyer { lawyer_id } => self.assign_lawyer(incident, *lawyer_id),
            IncidentAction::MoveQueue { target, fees } => {
                self.move_queue(incident, *target, *fees)
            }
            IncidentAction::AddExpense { fees } => self.add_expense(incident, *fees),
        }
    }

    /// Applies one action across a batch, returning one outcome per
    /// incident in input order
    ///
    /// Each incident is evaluated independently against the same guards; a
    /// rejection never aborts the remaining incidents.
    pub fn apply_bulk(
        &self,
        incidents: &mut [Incident],
        action: &IncidentAction,
    ) -> Vec<BulkOutcome> {
        let outcomes: Vec<BulkOutcome> = incidents
            .iter_mut()
            .map(|incident| {
                let incident_id = incident.id;
                let outcome = self.apply(incident, action).map(|()| incident.queue);
                BulkOutcome {
                    incident_id,
                    outcome,
                }
            })
            .collect();

        let accepted = outcomes.iter().filter(|o| o.outcome.is_ok()).count();
        debug!(
            action = %action.kind(),
            total = outcomes.len(),
            accepted,
            "bulk action applied"
        );
        outcomes
    }

    fn guard_action(&self, incident: &Incident, action: ActionKind) -> Result<(), IncidentError> {
        if !action_permitted(incident.queue, action) {
            warn!(incident = %incident.id, queue = %incident.queue, %action, "action not available");
            return Err(IncidentError::ActionNotAvailable {
                action,
                queue: incident.queue,
            });
        }
        Ok(())
    }
}
