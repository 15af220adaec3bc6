//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the incident workflow suite. Fixtures are
//! consistent and predictable so assertions can use literal values.

use core_kernel::{AgentId, Currency, IncidentId, LawyerId, Money};
use domain_incidents::SettlementFees;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard INR amount for testing
    pub fn inr_500() -> Money {
        Money::new(dec!(500.00), Currency::INR)
    }

    /// Creates a smaller INR amount for government fee components
    pub fn inr_200() -> Money {
        Money::new(dec!(200.00), Currency::INR)
    }

    /// Creates a zero INR amount
    pub fn inr_zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// Creates a USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// Creates a negative amount for malformed-fee tests
    pub fn inr_negative() -> Money {
        Money::new(dec!(-50.00), Currency::INR)
    }
}

/// Fixture for settlement fee test data
pub struct FeeFixtures;

impl FeeFixtures {
    /// The standard settlement capture: 500 lawyer, 200 government, 0
    /// miscellaneous, total 700
    pub fn standard() -> SettlementFees {
        SettlementFees::new(
            MoneyFixtures::inr_500(),
            MoneyFixtures::inr_200(),
            MoneyFixtures::inr_zero(),
        )
        .expect("standard fee fixture should be well-formed")
    }

    /// An all-zero fee record
    pub fn zero() -> SettlementFees {
        SettlementFees::new(
            MoneyFixtures::inr_zero(),
            MoneyFixtures::inr_zero(),
            MoneyFixtures::inr_zero(),
        )
        .expect("zero fee fixture should be well-formed")
    }

    /// A distinct second capture for overwrite tests, total 350
    pub fn revised() -> SettlementFees {
        SettlementFees::new(
            Money::new(dec!(250.00), Currency::INR),
            Money::new(dec!(100.00), Currency::INR),
            Money::zero(Currency::INR),
        )
        .expect("revised fee fixture should be well-formed")
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic incident ID for testing
    pub fn incident_id() -> IncidentId {
        IncidentId::from_uuid(Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap())
    }

    /// Creates a deterministic agent ID for testing
    pub fn agent_id() -> AgentId {
        AgentId::from_uuid(Uuid::parse_str("00000000-0000-4000-8000-0000000000a1").unwrap())
    }

    /// Creates a deterministic lawyer ID for testing
    pub fn lawyer_id() -> LawyerId {
        LawyerId::from_uuid(Uuid::parse_str("00000000-0000-4000-8000-0000000000b1").unwrap())
    }
}
