//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful failure messages than bare assert_eq.

use domain_incidents::{Incident, Queue};
use rust_decimal::Decimal;

/// Asserts that an incident occupies the expected queue
pub fn assert_in_queue(incident: &Incident, expected: Queue) {
    assert_eq!(
        incident.queue, expected,
        "Incident {} expected in {}, found in {}",
        incident.id, expected, incident.queue
    );
}

/// Asserts that an incident has neither an agent nor a lawyer assigned
pub fn assert_unassigned(incident: &Incident) {
    assert!(
        incident.assigned_agent_id.is_none(),
        "Incident {} unexpectedly has an agent assigned",
        incident.id
    );
    assert!(
        incident.assigned_lawyer_id.is_none(),
        "Incident {} unexpectedly has a lawyer assigned",
        incident.id
    );
}

/// Asserts that the recorded fee total equals the expected amount
pub fn assert_fees_total(incident: &Incident, expected: Decimal) {
    let total = incident
        .total_fees()
        .unwrap_or_else(|| panic!("Incident {} has no fees recorded", incident.id));
    assert_eq!(
        total.amount(),
        expected,
        "Incident {} fee total mismatch: expected {}, got {}",
        incident.id,
        expected,
        total.amount()
    );
}

/// Asserts that no fees are recorded on an incident
pub fn assert_no_fees(incident: &Incident) {
    assert!(
        incident.settlement_fees.is_none(),
        "Incident {} unexpectedly has fees recorded",
        incident.id
    );
}
