//! Incident aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AgentId, Currency, IncidentId, LawyerId, Money};

use crate::error::IncidentError;

/// Workflow queue an incident currently occupies
///
/// Serialized names match the console's wire spelling (`newIncidents`,
/// `notSettled`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Queue {
    /// Freshly intaken challans awaiting validation or screening
    NewIncidents,
    /// Passed intake review
    Screening,
    /// A field agent is working the challan
    AgentAssigned,
    /// Escalated to a lawyer
    LawyerAssigned,
    /// Resolved with fees recorded
    Settled,
    /// Resolution failed; only refund remains
    NotSettled,
    /// Parked pending external input
    Hold,
    /// Refund in progress
    Refund,
}

impl Queue {
    /// All queues, in the conventional forward order
    pub const ALL: [Queue; 8] = [
        Queue::NewIncidents,
        Queue::Screening,
        Queue::AgentAssigned,
        Queue::LawyerAssigned,
        Queue::Settled,
        Queue::NotSettled,
        Queue::Hold,
        Queue::Refund,
    ];

    /// Returns the console wire spelling of the queue
    pub fn as_str(&self) -> &'static str {
        match self {
            Queue::NewIncidents => "newIncidents",
            Queue::Screening => "screening",
            Queue::AgentAssigned => "agentAssigned",
            Queue::LawyerAssigned => "lawyerAssigned",
            Queue::Settled => "settled",
            Queue::NotSettled => "notSettled",
            Queue::Hold => "hold",
            Queue::Refund => "refund",
        }
    }

    /// True for queues that cannot be entered without settlement fee data
    pub fn requires_settlement(&self) -> bool {
        matches!(self, Queue::Settled | Queue::NotSettled)
    }
}

impl std::fmt::Display for Queue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settlement fee components recorded when a challan is settled, marked
/// not-settled, or given a standalone expense entry
///
/// Constructed whole or not at all: every component must be non-negative
/// and share one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementFees {
    lawyer_fees: Money,
    govt_fees: Money,
    misc_fees: Money,
}

impl SettlementFees {
    /// Creates a fee record, rejecting negative components and mixed
    /// currencies with `MalformedFees`
    pub fn new(
        lawyer_fees: Money,
        govt_fees: Money,
        misc_fees: Money,
    ) -> Result<Self, IncidentError> {
        for (label, component) in [
            ("lawyerFees", &lawyer_fees),
            ("govtFees", &govt_fees),
            ("miscFees", &misc_fees),
        ] {
            if component.is_negative() {
                return Err(IncidentError::MalformedFees(format!(
                    "{label} is negative: {component}"
                )));
            }
        }
        if lawyer_fees.currency() != govt_fees.currency()
            || govt_fees.currency() != misc_fees.currency()
        {
            return Err(IncidentError::MalformedFees(
                "fee components use mixed currencies".to_string(),
            ));
        }

        Ok(Self {
            lawyer_fees,
            govt_fees,
            misc_fees,
        })
    }

    /// Convenience constructor from raw amounts in a single currency
    pub fn from_amounts(
        lawyer: Decimal,
        govt: Decimal,
        misc: Decimal,
        currency: Currency,
    ) -> Result<Self, IncidentError> {
        Self::new(
            Money::new(lawyer, currency),
            Money::new(govt, currency),
            Money::new(misc, currency),
        )
    }

    /// Lawyer fee component
    pub fn lawyer_fees(&self) -> Money {
        self.lawyer_fees
    }

    /// Government fee component
    pub fn govt_fees(&self) -> Money {
        self.govt_fees
    }

    /// Miscellaneous fee component
    pub fn misc_fees(&self) -> Money {
        self.misc_fees
    }

    /// The displayed total: sum of the three components
    pub fn total(&self) -> Money {
        self.lawyer_fees + self.govt_fees + self.misc_fees
    }
}

/// A traffic challan being tracked through resolution
///
/// Only `queue`, the assignment fields, and `settlement_fees` mutate after
/// intake, and only through the engine's accepted transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Unique identifier, immutable after intake
    pub id: IncidentId,
    /// Human-facing challan reference
    pub challan_number: String,
    /// Current workflow queue
    pub queue: Queue,
    /// Assigned field agent, if any
    pub assigned_agent_id: Option<AgentId>,
    /// Assigned lawyer, if any
    pub assigned_lawyer_id: Option<LawyerId>,
    /// Fees recorded by a settlement transition or an expense entry
    pub settlement_fees: Option<SettlementFees>,
    /// Intake timestamp
    pub created_at: DateTime<Utc>,
    /// Refreshed on every accepted mutating action
    pub last_updated_at: DateTime<Utc>,
}

impl Incident {
    /// Creates a new incident at intake, in `newIncidents` with no
    /// assignments
    pub fn intake() -> Self {
        let now = Utc::now();

        Self {
            id: IncidentId::new_v7(),
            challan_number: generate_challan_number(),
            queue: Queue::NewIncidents,
            assigned_agent_id: None,
            assigned_lawyer_id: None,
            settlement_fees: None,
            created_at: now,
            last_updated_at: now,
        }
    }

    /// Total of the recorded fee components, if any are recorded
    pub fn total_fees(&self) -> Option<Money> {
        self.settlement_fees.map(|fees| fees.total())
    }

    pub(crate) fn touch(&mut self) {
        self.last_updated_at = Utc::now();
    }
}

fn generate_challan_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("CHN-{}", duration.as_millis() % 10_000_000_000)
}
