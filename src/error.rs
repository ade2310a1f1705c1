use super::draft::FieldId;
use std::collections::BTreeSet;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IntakeError {
    #[error("draft is missing required fields: {0:?}")]
    MissingFields(BTreeSet<FieldId>),
    #[error("a submission is already awaiting confirmation")]
    AlreadyAwaitingConfirmation,
    #[error("no submission is awaiting confirmation")]
    NothingToConfirm,
    #[error("no submission is awaiting cancellation")]
    NothingToCancel,
}
