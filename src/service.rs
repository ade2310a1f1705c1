//! Service layer API for the order intake flow
use super::draft::{DeliveryOption, FieldId, OrderDraft};
use super::error::IntakeError;
use super::gate::{EventKind, GateState, IntakeContext, IntakeEvent};
use super::link;
use super::message;
use super::rules::{self, ValidationResult};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Boundary effect that opens an external URL. Fire-and-forget: the flow
/// never observes the outcome, so implementations must not block on it.
pub trait OpenUrl {
    fn open(&self, url: &str);
}

/// Single-owner façade over the whole intake flow: one draft, one gate,
/// one handoff destination. Owned by exactly one logical thread of
/// control; every operation runs synchronously to completion.
pub struct IntakeFlow {
    context: IntakeContext,
    draft: OrderDraft,
    destination: String,
    opener: Box<dyn OpenUrl>,
    last_missing: BTreeSet<FieldId>,
}

impl IntakeFlow {
    pub fn new(destination: impl Into<String>, opener: Box<dyn OpenUrl>) -> anyhow::Result<Self> {
        Ok(Self {
            context: IntakeContext::new()?,
            draft: OrderDraft::new(),
            destination: destination.into(),
            opener,
            last_missing: BTreeSet::new(),
        })
    }

    pub fn intake_id(&self) -> &str {
        &self.context.intake_id
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn gate_state(&self) -> GateState {
        self.context.current_state()
    }

    /// Fields the last rejected submit reported, for required-field
    /// indicators. Empty until a submit has been rejected.
    pub fn missing_fields(&self) -> &BTreeSet<FieldId> {
        &self.last_missing
    }

    pub fn events(&self) -> &[IntakeEvent] {
        self.context.events()
    }

    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn select_delivery_option(&mut self, option: DeliveryOption) {
        self.draft.select_delivery_option(option);
    }

    /// Validated submit, only from an idle gate. Only a `Valid` draft arms
    /// the gate; a rejected submit leaves it idle and retains the missing
    /// set.
    pub fn submit(&mut self) -> anyhow::Result<ValidationResult> {
        if self.gate_state() == GateState::AwaitingConfirmation {
            return Err(IntakeError::AlreadyAwaitingConfirmation.into());
        }

        let result = rules::validate(&self.draft);
        match &result {
            ValidationResult::Valid => {
                self.last_missing.clear();
                self.context.record(EventKind::Submitted {
                    option: self.draft.delivery_option(),
                });
                debug!(
                    intake_id = %self.context.intake_id,
                    option = ?self.draft.delivery_option(),
                    "submit accepted, awaiting confirmation"
                );
            }
            ValidationResult::Invalid(fields) => {
                self.last_missing = fields.clone();
                debug!(
                    intake_id = %self.context.intake_id,
                    missing = ?fields,
                    "submit rejected"
                );
            }
        }
        Ok(result)
    }

    /// Complete the handoff: format the summary, build the wa.me link and
    /// fire the open effect. Returns the built link.
    ///
    /// The draft stays editable while the gate is armed, so it is checked
    /// again here; a draft invalidated since its submit is rejected and the
    /// gate stays armed for a corrected retry.
    pub fn confirm(&mut self) -> anyhow::Result<String> {
        if self.gate_state() != GateState::AwaitingConfirmation {
            return Err(IntakeError::NothingToConfirm.into());
        }
        if let ValidationResult::Invalid(fields) = rules::validate(&self.draft) {
            self.last_missing = fields.clone();
            debug!(
                intake_id = %self.context.intake_id,
                missing = ?fields,
                "confirm rejected, draft edited into an invalid state"
            );
            return Err(IntakeError::MissingFields(fields).into());
        }

        let summary = message::format(&self.draft);
        let url = link::build_link(&self.destination, &summary);
        self.opener.open(&url);
        self.context.record(EventKind::Confirmed { link: url.clone() });
        info!(intake_id = %self.context.intake_id, "handoff link opened");

        Ok(url)
    }

    /// Back out of an armed submission. No link is built.
    pub fn cancel(&mut self) -> anyhow::Result<()> {
        if self.gate_state() != GateState::AwaitingConfirmation {
            return Err(IntakeError::NothingToCancel.into());
        }

        self.context.record(EventKind::Cancelled);
        debug!(intake_id = %self.context.intake_id, "submission cancelled");

        Ok(())
    }

    /// Empty the draft for a fresh order. The event trail is append-only
    /// and keeps what already happened.
    pub fn reset_draft(&mut self) {
        self.draft.reset();
        self.last_missing.clear();
    }
}
