//! Queue Transition Engine Tests
//!
//! Covers the single-incident operation surface: entry actions,
//! assignment, general moves with settlement fee capture, the two-phase
//! transition protocol, and expense recording.
//!
//! # Test Organization
//!
//! - `entry_actions` - validate/screen from intake
//! - `assignment` - agent and lawyer assignment guards
//! - `queue_moves` - moveQueue guards and fee requirements
//! - `two_phase` - beginTransition/completeTransition protocol
//! - `expenses` - addExpense ledger behavior

use rust_decimal_macros::dec;

use core_kernel::Currency;
use domain_incidents::{
    ActionKind, Incident, IncidentError, Queue, QueueTransitionEngine, SettlementFees,
    TransitionPlan,
};
use test_utils::{
    assert_fees_total, assert_in_queue, assert_no_fees, assert_unassigned, FeeFixtures,
    IdFixtures, IncidentBuilder,
};

fn engine() -> QueueTransitionEngine {
    QueueTransitionEngine::new()
}

fn incident_in(queue: Queue) -> Incident {
    IncidentBuilder::new().in_queue(queue).build()
}

mod entry_actions {
    use super::*;

    /// Verifies that validate advances a new incident to screening
    #[test]
    fn test_validate_advances_to_screening() {
        let mut incident = incident_in(Queue::NewIncidents);

        engine().validate(&mut incident).unwrap();

        assert_in_queue(&incident, Queue::Screening);
        assert_unassigned(&incident);
    }

    /// Verifies that screen is an alternate entry action with the same
    /// effect as validate
    #[test]
    fn test_screen_advances_to_screening() {
        let mut incident = incident_in(Queue::NewIncidents);

        engine().screen(&mut incident).unwrap();

        assert_in_queue(&incident, Queue::Screening);
    }

    /// Verifies that entry actions reject from every other queue
    #[test]
    fn test_entry_actions_reject_outside_intake() {
        for queue in Queue::ALL {
            if queue == Queue::NewIncidents {
                continue;
            }

            let mut incident = incident_in(queue);
            let result = engine().validate(&mut incident);
            assert_eq!(
                result,
                Err(IncidentError::InvalidTransition {
                    from: queue,
                    to: Queue::Screening,
                }),
                "validate should reject from {queue}"
            );
            assert_in_queue(&incident, queue);

            let result = engine().screen(&mut incident);
            assert!(result.is_err(), "screen should reject from {queue}");
        }
    }

    /// Verifies that entry actions refresh the update timestamp
    #[test]
    fn test_entry_action_touches_timestamp() {
        let mut incident = incident_in(Queue::NewIncidents);
        let before = incident.last_updated_at;

        engine().validate(&mut incident).unwrap();

        assert!(incident.last_updated_at >= before);
    }
}

mod assignment {
    use super::*;

    /// Verifies agent assignment sets the reference without moving the
    /// incident
    #[test]
    fn test_assign_agent_keeps_queue() {
        let mut incident = incident_in(Queue::Screening);
        let agent = IdFixtures::agent_id();

        engine().assign_agent(&mut incident, agent).unwrap();

        assert_eq!(incident.assigned_agent_id, Some(agent));
        assert_in_queue(&incident, Queue::Screening);
    }

    /// Verifies lawyer assignment mirrors agent assignment
    #[test]
    fn test_assign_lawyer_keeps_queue() {
        let mut incident = incident_in(Queue::AgentAssigned);
        let lawyer = IdFixtures::lawyer_id();

        engine().assign_lawyer(&mut incident, lawyer).unwrap();

        assert_eq!(incident.assigned_lawyer_id, Some(lawyer));
        assert_in_queue(&incident, Queue::AgentAssigned);
    }

    /// Concrete example: assigning an agent to a new incident rejects and
    /// leaves the assignment unset
    #[test]
    fn test_assign_agent_rejected_at_intake() {
        let mut incident = incident_in(Queue::NewIncidents);

        let result = engine().assign_agent(&mut incident, IdFixtures::agent_id());

        assert_eq!(
            result,
            Err(IncidentError::ActionNotAvailable {
                action: ActionKind::AssignAgent,
                queue: Queue::NewIncidents,
            })
        );
        assert_unassigned(&incident);
    }

    /// Verifies lawyer assignment is also rejected at intake
    #[test]
    fn test_assign_lawyer_rejected_at_intake() {
        let mut incident = incident_in(Queue::NewIncidents);

        let result = engine().assign_lawyer(&mut incident, IdFixtures::lawyer_id());

        assert!(matches!(
            result,
            Err(IncidentError::ActionNotAvailable {
                action: ActionKind::AssignLawyer,
                ..
            })
        ));
        assert_unassigned(&incident);
    }

    /// Verifies assignment is legal from every post-intake queue
    #[test]
    fn test_assignment_legal_after_intake() {
        for queue in Queue::ALL {
            if queue == Queue::NewIncidents {
                continue;
            }

            let mut incident = incident_in(queue);
            let result = engine().assign_agent(&mut incident, IdFixtures::agent_id());
            assert!(result.is_ok(), "assign_agent should succeed from {queue}");
            assert_in_queue(&incident, queue);
        }
    }
}

mod queue_moves {
    use super::*;

    /// Concrete example: screening -> settled with 500/200/0 fees records
    /// a total of 700
    #[test]
    fn test_move_to_settled_with_fees() {
        let mut incident = incident_in(Queue::Screening);
        let fees =
            SettlementFees::from_amounts(dec!(500), dec!(200), dec!(0), Currency::INR).unwrap();

        engine()
            .move_queue(&mut incident, Queue::Settled, Some(fees))
            .unwrap();

        assert_in_queue(&incident, Queue::Settled);
        assert_eq!(incident.settlement_fees, Some(fees));
        assert_fees_total(&incident, dec!(700));
    }

    /// Verifies settlement targets reject without fee data, leaving the
    /// incident untouched
    #[test]
    fn test_settlement_targets_require_fees() {
        for target in [Queue::Settled, Queue::NotSettled] {
            let mut incident = incident_in(Queue::LawyerAssigned);

            let result = engine().move_queue(&mut incident, target, None);

            assert_eq!(
                result,
                Err(IncidentError::SettlementRequired { target }),
                "move to {target} should require fees"
            );
            assert_in_queue(&incident, Queue::LawyerAssigned);
            assert_no_fees(&incident);
        }
    }

    /// Verifies plain moves need no fees
    #[test]
    fn test_plain_move_needs_no_fees() {
        let mut incident = incident_in(Queue::AgentAssigned);

        engine()
            .move_queue(&mut incident, Queue::Hold, None)
            .unwrap();

        assert_in_queue(&incident, Queue::Hold);
        assert_no_fees(&incident);
    }

    /// Verifies fees supplied on a plain move are still recorded
    #[test]
    fn test_plain_move_records_supplied_fees() {
        let mut incident = incident_in(Queue::AgentAssigned);

        engine()
            .move_queue(&mut incident, Queue::Hold, Some(FeeFixtures::standard()))
            .unwrap();

        assert_in_queue(&incident, Queue::Hold);
        assert_fees_total(&incident, dec!(700));
    }

    /// Verifies moveQueue is entirely unavailable from intake
    #[test]
    fn test_move_rejected_at_intake() {
        let mut incident = incident_in(Queue::NewIncidents);

        let result = engine().move_queue(&mut incident, Queue::Hold, None);

        assert_eq!(
            result,
            Err(IncidentError::ActionNotAvailable {
                action: ActionKind::MoveQueue,
                queue: Queue::NewIncidents,
            })
        );
        assert_in_queue(&incident, Queue::NewIncidents);
    }

    /// Verifies refund is the only legal target from notSettled
    #[test]
    fn test_not_settled_only_advances_to_refund() {
        for target in Queue::ALL {
            let mut incident = incident_in(Queue::NotSettled);
            let result = engine().move_queue(&mut incident, target, Some(FeeFixtures::standard()));

            if target == Queue::Refund {
                assert!(result.is_ok(), "refund should be reachable from notSettled");
                assert_in_queue(&incident, Queue::Refund);
            } else {
                assert_eq!(
                    result,
                    Err(IncidentError::InvalidTransition {
                        from: Queue::NotSettled,
                        to: target,
                    }),
                    "notSettled -> {target} should be rejected"
                );
                assert_in_queue(&incident, Queue::NotSettled);
            }
        }
    }

    /// Verifies nothing moves back into the intake queue
    #[test]
    fn test_intake_is_not_a_move_target() {
        let mut incident = incident_in(Queue::Hold);

        let result = engine().move_queue(&mut incident, Queue::NewIncidents, None);

        assert_eq!(
            result,
            Err(IncidentError::InvalidTransition {
                from: Queue::Hold,
                to: Queue::NewIncidents,
            })
        );
        assert_in_queue(&incident, Queue::Hold);
    }
}

mod two_phase {
    use super::*;

    /// Verifies beginTransition reports fee capture for settlement targets
    /// without mutating the incident
    #[test]
    fn test_begin_reports_fees_required() {
        let incident = incident_in(Queue::Screening);

        let plan = engine()
            .begin_transition(&incident, Queue::Settled)
            .unwrap();

        assert_eq!(
            plan,
            TransitionPlan::FeesRequired {
                target: Queue::Settled,
            }
        );
        assert!(plan.requires_fees());
        assert_in_queue(&incident, Queue::Screening);
        assert_no_fees(&incident);
    }

    /// Verifies beginTransition is ready for plain targets
    #[test]
    fn test_begin_ready_for_plain_targets() {
        let incident = incident_in(Queue::Screening);

        let plan = engine().begin_transition(&incident, Queue::Hold).unwrap();

        assert_eq!(
            plan,
            TransitionPlan::Ready {
                target: Queue::Hold,
            }
        );
        assert!(!plan.requires_fees());
    }

    /// Verifies completing a fees-required plan with fees commits the move
    #[test]
    fn test_complete_with_fees_commits() {
        let mut incident = incident_in(Queue::Screening);
        let plan = engine()
            .begin_transition(&incident, Queue::NotSettled)
            .unwrap();

        engine()
            .complete_transition(&mut incident, plan, Some(FeeFixtures::standard()))
            .unwrap();

        assert_in_queue(&incident, Queue::NotSettled);
        assert_fees_total(&incident, dec!(700));
    }

    /// Verifies completing a fees-required plan without fees rejects
    #[test]
    fn test_complete_without_fees_rejects() {
        let mut incident = incident_in(Queue::Screening);
        let plan = engine()
            .begin_transition(&incident, Queue::Settled)
            .unwrap();

        let result = engine().complete_transition(&mut incident, plan, None);

        assert_eq!(
            result,
            Err(IncidentError::SettlementRequired {
                target: Queue::Settled,
            })
        );
        assert_in_queue(&incident, Queue::Screening);
        assert_no_fees(&incident);
    }

    /// Verifies a plan held across an interleaved move cannot bypass the
    /// guards
    #[test]
    fn test_stale_plan_is_revalidated() {
        let mut incident = incident_in(Queue::Screening);
        let plan = engine().begin_transition(&incident, Queue::Hold).unwrap();

        // The incident reaches notSettled before the plan completes.
        engine()
            .move_queue(&mut incident, Queue::NotSettled, Some(FeeFixtures::standard()))
            .unwrap();

        let result = engine().complete_transition(&mut incident, plan, None);

        assert_eq!(
            result,
            Err(IncidentError::InvalidTransition {
                from: Queue::NotSettled,
                to: Queue::Hold,
            })
        );
        assert_in_queue(&incident, Queue::NotSettled);
    }
}

mod expenses {
    use super::*;

    /// Verifies addExpense never changes the queue, from any queue
    #[test]
    fn test_add_expense_keeps_queue_everywhere() {
        for queue in Queue::ALL {
            let mut incident = incident_in(queue);

            engine()
                .add_expense(&mut incident, FeeFixtures::standard())
                .unwrap();

            assert_in_queue(&incident, queue);
            assert_fees_total(&incident, dec!(700));
        }
    }

    /// Verifies a second capture overwrites the first
    #[test]
    fn test_add_expense_overwrites() {
        let mut incident = incident_in(Queue::Hold);

        engine()
            .add_expense(&mut incident, FeeFixtures::standard())
            .unwrap();
        engine()
            .add_expense(&mut incident, FeeFixtures::revised())
            .unwrap();

        assert_fees_total(&incident, dec!(350));
    }

    /// Verifies recording the same fees twice equals recording them once
    #[test]
    fn test_add_expense_is_idempotent() {
        let mut once = incident_in(Queue::Hold);
        let mut twice = incident_in(Queue::Hold);
        let fees = FeeFixtures::standard();

        engine().add_expense(&mut once, fees).unwrap();
        engine().add_expense(&mut twice, fees).unwrap();
        engine().add_expense(&mut twice, fees).unwrap();

        assert_eq!(once.settlement_fees, twice.settlement_fees);
    }
}

mod snapshots {
    use super::*;

    /// Verifies incident snapshots serialize in the console's camelCase
    /// field spelling
    #[test]
    fn test_incident_serializes_in_wire_spelling() {
        let incident = IncidentBuilder::new()
            .in_queue(Queue::Settled)
            .with_fees(FeeFixtures::standard())
            .build();

        let json = serde_json::to_value(&incident).unwrap();

        assert_eq!(json["queue"], "settled");
        assert!(json.get("challanNumber").is_some());
        assert!(json.get("assignedAgentId").is_some());
        assert!(json.get("lastUpdatedAt").is_some());
        assert!(json["settlementFees"].get("lawyerFees").is_some());
    }
}
