//! Action availability resolution
//!
//! One guard table shared by the UI-availability check and the transition
//! engine, so the rendered menus and the engine can never disagree about
//! what is legal from a queue.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::incident::Queue;

/// The actions a caller can surface for an incident row or a bulk selection
///
/// `SendToRefund` is the dedicated not-settled action; at the engine level
/// it is a `moveQueue` with target `refund`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Validate,
    Screen,
    AssignAgent,
    AssignLawyer,
    MoveQueue,
    AddExpense,
    SendToRefund,
}

impl ActionKind {
    /// All action kinds a caller can surface
    pub const ALL: [ActionKind; 7] = [
        ActionKind::Validate,
        ActionKind::Screen,
        ActionKind::AssignAgent,
        ActionKind::AssignLawyer,
        ActionKind::MoveQueue,
        ActionKind::AddExpense,
        ActionKind::SendToRefund,
    ];

    /// Returns the console wire spelling of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Validate => "validate",
            ActionKind::Screen => "screen",
            ActionKind::AssignAgent => "assignAgent",
            ActionKind::AssignLawyer => "assignLawyer",
            ActionKind::MoveQueue => "moveQueue",
            ActionKind::AddExpense => "addExpense",
            ActionKind::SendToRefund => "sendToRefund",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-incident guard: is `action` categorically allowed from `queue`?
///
/// This is the table the engine enforces. The `notSettled` refund-only
/// context rule is layered on top by [`available_actions`]; it is a
/// queue-view contract, not a per-incident guard.
pub(crate) fn action_permitted(queue: Queue, action: ActionKind) -> bool {
    use ActionKind::*;

    match action {
        // Entry actions only make sense before intake review.
        Validate | Screen => queue == Queue::NewIncidents,
        // Assignment and moves require intake review to have happened.
        AssignAgent | AssignLawyer | MoveQueue | SendToRefund => queue != Queue::NewIncidents,
        // Expenses are a running ledger, not a workflow step.
        AddExpense => true,
    }
}

/// Actions the caller may surface for a single incident in `queue`
pub fn available_actions(queue: Queue) -> BTreeSet<ActionKind> {
    // The not-settled view surfaces exactly one action, single or bulk.
    if queue == Queue::NotSettled {
        return BTreeSet::from([ActionKind::SendToRefund]);
    }

    // Elsewhere a refund is an ordinary move; surface the general actions
    // straight from the guard table.
    ActionKind::ALL
        .into_iter()
        .filter(|action| *action != ActionKind::SendToRefund)
        .filter(|action| action_permitted(queue, *action))
        .collect()
}

/// Actions the caller may surface for a bulk selection spanning `queues`
///
/// The `notSettled` refund-only rule takes precedence over per-queue
/// intersection; an empty selection has no available actions.
pub fn available_actions_for_set<I>(queues: I) -> BTreeSet<ActionKind>
where
    I: IntoIterator<Item = Queue>,
{
    let queues: Vec<Queue> = queues.into_iter().collect();
    let Some(first) = queues.first() else {
        return BTreeSet::new();
    };

    if queues.contains(&Queue::NotSettled) {
        return available_actions(Queue::NotSettled);
    }

    let mut actions = available_actions(*first);
    for queue in &queues[1..] {
        let per_queue = available_actions(*queue);
        actions = actions.intersection(&per_queue).copied().collect();
    }
    actions
}
