//! Field validation rules. Pure predicates over the draft, no side effects.
use super::draft::{FieldId, OrderDraft};
use std::collections::BTreeSet;

/// Outcome of [`validate`]. `Invalid` always carries a non-empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(BTreeSet<FieldId>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
    /// Fields still to be completed, empty when valid.
    pub fn missing_fields(&self) -> BTreeSet<FieldId> {
        match self {
            ValidationResult::Valid => BTreeSet::new(),
            ValidationResult::Invalid(fields) => fields.clone(),
        }
    }
}

// Address sub-fields checked as a unit when the option ships something.
// `complement` stays optional either way.
const ADDRESS_REQUIRED: [FieldId; 6] = [
    FieldId::Street,
    FieldId::Number,
    FieldId::Neighborhood,
    FieldId::City,
    FieldId::State,
    FieldId::Zipcode,
];

/// Checks the draft against the rules conditioned on its delivery option.
pub fn validate(draft: &OrderDraft) -> ValidationResult {
    let mut missing = BTreeSet::new();

    if draft.field(FieldId::Name).trim().is_empty() {
        missing.insert(FieldId::Name);
    }
    if !email_has_minimal_shape(draft.field(FieldId::Email).trim()) {
        missing.insert(FieldId::Email);
    }
    // phone is free-form and optional, never reported

    if draft.delivery_option().needs_address() {
        for field in ADDRESS_REQUIRED {
            if draft.field(field).trim().is_empty() {
                missing.insert(field);
            }
        }
    }

    if missing.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(missing)
    }
}

/// Minimal email shape: exactly one `@`, a non-empty local part, and a
/// domain of non-empty `.`-separated segments with at least one dot.
fn email_has_minimal_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut segments = domain.split('.');
    domain.contains('.') && segments.all(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DeliveryOption;

    #[test]
    fn email_shape_accepts_and_rejects() {
        assert!(email_has_minimal_shape("maria@example.com"));
        assert!(email_has_minimal_shape("x@x.com"));
        assert!(!email_has_minimal_shape(""));
        assert!(!email_has_minimal_shape("maria"));
        assert!(!email_has_minimal_shape("@example.com"));
        assert!(!email_has_minimal_shape("maria@example"));
        assert!(!email_has_minimal_shape("maria@example..com"));
        assert!(!email_has_minimal_shape("maria@@example.com"));
    }

    #[test]
    fn digital_ignores_address_content() {
        let mut draft = OrderDraft::new();
        draft.set_field(FieldId::Name, "Maria Silva");
        draft.set_field(FieldId::Email, "maria@example.com");
        // address untouched, option is Digital by default
        assert_eq!(validate(&draft), ValidationResult::Valid);
    }

    #[test]
    fn printed_requires_the_address_unit() {
        let mut draft = OrderDraft::new();
        draft.set_field(FieldId::Name, "Maria Silva");
        draft.set_field(FieldId::Email, "maria@example.com");
        draft.select_delivery_option(DeliveryOption::Printed);

        let missing = validate(&draft).missing_fields();
        assert_eq!(missing.len(), 6);
        assert!(missing.contains(&FieldId::Street));
        assert!(missing.contains(&FieldId::Zipcode));
        assert!(!missing.contains(&FieldId::Complement));
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let mut draft = OrderDraft::new();
        draft.set_field(FieldId::Name, "   ");
        draft.set_field(FieldId::Email, "x@x.com");
        let missing = validate(&draft).missing_fields();
        assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec![FieldId::Name]);
    }
}
