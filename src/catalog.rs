//! Static delivery-option catalog for rendering the selector.
//!
//! Availability is static configuration for the current offering, not a
//! runtime check; the core surfaces the flag and leaves enforcement to the
//! caller rendering the selector.
use super::draft::DeliveryOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryPlan {
    pub option: DeliveryOption,
    pub select_label: &'static str,
    pub available: bool,
}

/// The three plans offered, in selector order. Only the e-book is
/// currently purchasable.
pub const PLANS: [DeliveryPlan; 3] = [
    DeliveryPlan {
        option: DeliveryOption::Digital,
        select_label: "E-book \"As Vírgulas de Deus\"",
        available: true,
    },
    DeliveryPlan {
        option: DeliveryOption::Printed,
        select_label: "Livro Impresso (Indisponível)",
        available: false,
    },
    DeliveryPlan {
        option: DeliveryOption::Combo,
        select_label: "Combo Completo (Indisponível)",
        available: false,
    },
];

pub fn is_available(option: DeliveryOption) -> bool {
    PLANS
        .iter()
        .any(|plan| plan.option == option && plan.available)
}
