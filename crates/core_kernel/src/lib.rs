//! Core Kernel - Foundational types for the challan operations console
//!
//! This crate provides the building blocks used by the incident workflow
//! domain:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for domain entities

pub mod identifiers;
pub mod money;

pub use identifiers::{AgentId, IncidentId, LawyerId};
pub use money::{Currency, Money, MoneyError};
