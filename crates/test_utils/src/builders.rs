//! Test Data Builders
//!
//! Builder patterns for constructing test incidents with sensible
//! defaults, so tests specify only the fields they care about.

use chrono::Utc;
use core_kernel::{AgentId, IncidentId, LawyerId};
use domain_incidents::{Incident, Queue, SettlementFees};

/// Builder for constructing test incidents
pub struct IncidentBuilder {
    id: IncidentId,
    challan_number: String,
    queue: Queue,
    assigned_agent_id: Option<AgentId>,
    assigned_lawyer_id: Option<LawyerId>,
    settlement_fees: Option<SettlementFees>,
}

impl Default for IncidentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IncidentBuilder {
    /// Creates a builder for a freshly intaken incident
    pub fn new() -> Self {
        Self {
            id: IncidentId::new(),
            challan_number: "CHN-1000000001".to_string(),
            queue: Queue::NewIncidents,
            assigned_agent_id: None,
            assigned_lawyer_id: None,
            settlement_fees: None,
        }
    }

    /// Sets the incident ID
    pub fn with_id(mut self, id: IncidentId) -> Self {
        self.id = id;
        self
    }

    /// Sets the challan number
    pub fn with_challan_number(mut self, number: impl Into<String>) -> Self {
        self.challan_number = number.into();
        self
    }

    /// Places the incident in a queue
    pub fn in_queue(mut self, queue: Queue) -> Self {
        self.queue = queue;
        self
    }

    /// Assigns a field agent
    pub fn with_agent(mut self, agent_id: AgentId) -> Self {
        self.assigned_agent_id = Some(agent_id);
        self
    }

    /// Assigns a lawyer
    pub fn with_lawyer(mut self, lawyer_id: LawyerId) -> Self {
        self.assigned_lawyer_id = Some(lawyer_id);
        self
    }

    /// Records settlement fees
    pub fn with_fees(mut self, fees: SettlementFees) -> Self {
        self.settlement_fees = Some(fees);
        self
    }

    /// Builds the test incident
    pub fn build(self) -> Incident {
        let now = Utc::now();
        Incident {
            id: self.id,
            challan_number: self.challan_number,
            queue: self.queue,
            assigned_agent_id: self.assigned_agent_id,
            assigned_lawyer_id: self.assigned_lawyer_id,
            settlement_fees: self.settlement_fees,
            created_at: now,
            last_updated_at: now,
        }
    }
}

/// Builds one incident per queue, in the given order
pub fn incidents_in_queues(queues: &[Queue]) -> Vec<Incident> {
    queues
        .iter()
        .map(|queue| IncidentBuilder::new().in_queue(*queue).build())
        .collect()
}
