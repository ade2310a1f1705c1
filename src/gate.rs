//! Confirmation gate, derived from the intake event trail.
//!
//! Each flow keeps an append-only list of the transitions it went through,
//! stamped in UTC. The gate state is a view over that trail: the flow is
//! awaiting confirmation exactly when the last event is a `Submitted`.
use super::draft::DeliveryOption;
use super::utils;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    AwaitingConfirmation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A validated submit. Invalid submits are not recorded.
    Submitted { option: DeliveryOption },
    /// Handoff completed, the built link is kept for tracing.
    Confirmed { link: String },
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeEvent {
    pub recorded_at: DateTime<Utc>,
    pub kind: EventKind,
}

impl IntakeEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            recorded_at: Utc::now(),
            kind,
        }
    }
}

#[derive(Debug)]
pub struct IntakeContext {
    pub intake_id: String, // uuid7, bech32 encoded
    events: Vec<IntakeEvent>,
}

impl IntakeContext {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            intake_id: utils::new_intake_ref("order")?,
            events: vec![],
        })
    }

    pub fn record(&mut self, kind: EventKind) {
        self.events.push(IntakeEvent::new(kind));
    }

    pub fn events(&self) -> &[IntakeEvent] {
        &self.events
    }

    /// Derive the gate state from the trail.
    pub fn current_state(&self) -> GateState {
        match self.events.last() {
            Some(IntakeEvent {
                kind: EventKind::Submitted { .. },
                ..
            }) => GateState::AwaitingConfirmation,
            _ => GateState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_is_idle() {
        let context = IntakeContext::new().unwrap();
        assert!(context.intake_id.starts_with("order1"));
        assert_eq!(context.current_state(), GateState::Idle);
    }

    #[test]
    fn submitted_then_cancelled_cycles_back_to_idle() {
        let mut context = IntakeContext::new().unwrap();
        context.record(EventKind::Submitted {
            option: DeliveryOption::Digital,
        });
        assert_eq!(context.current_state(), GateState::AwaitingConfirmation);

        context.record(EventKind::Cancelled);
        assert_eq!(context.current_state(), GateState::Idle);

        // the gate is cyclic, a later submit re-arms it
        context.record(EventKind::Submitted {
            option: DeliveryOption::Digital,
        });
        assert_eq!(context.current_state(), GateState::AwaitingConfirmation);
    }

    #[test]
    fn confirmed_leaves_the_gate_idle() {
        let mut context = IntakeContext::new().unwrap();
        context.record(EventKind::Submitted {
            option: DeliveryOption::Digital,
        });
        context.record(EventKind::Confirmed {
            link: "https://wa.me/0?text=x".into(),
        });
        assert_eq!(context.current_state(), GateState::Idle);
        assert_eq!(context.events().len(), 2);
    }
}
