//! The order draft: every field the purchase form collects

/// The product format the buyer picked. Conditions which address fields
/// the rules module requires.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeliveryOption {
    #[default]
    Digital,
    Printed,
    Combo,
}

impl DeliveryOption {
    /// Label rendered on the `Opção:` line of the handoff message.
    pub fn display_label(&self) -> &'static str {
        match self {
            DeliveryOption::Digital => "E-book",
            DeliveryOption::Printed => "Livro Impresso",
            DeliveryOption::Combo => "Combo Completo",
        }
    }
    /// A printed book (alone or in the combo) needs a shipping address.
    pub fn needs_address(&self) -> bool {
        !matches!(self, DeliveryOption::Digital)
    }
}

/// Addressable fields of an [`OrderDraft`]. Used both to write values in
/// and to name missing fields back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Street,
    Number,
    Complement,
    Neighborhood,
    City,
    State,
    Zipcode,
    Note,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

// Mutated field-by-field as the user types; read, never mutated, by the
// message formatter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    name: String,
    email: String,
    phone: String,
    delivery_option: DeliveryOption,
    address: Address,
    note: String,
}

impl OrderDraft {
    /// An empty draft, delivery option defaulted to `Digital`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a single field. Last write wins, no history is kept and
    /// no validation runs here.
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Phone => self.phone = value,
            FieldId::Street => self.address.street = value,
            FieldId::Number => self.address.number = value,
            FieldId::Complement => self.address.complement = value,
            FieldId::Neighborhood => self.address.neighborhood = value,
            FieldId::City => self.address.city = value,
            FieldId::State => self.address.state = value,
            FieldId::Zipcode => self.address.zipcode = value,
            FieldId::Note => self.note = value,
        }
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Street => &self.address.street,
            FieldId::Number => &self.address.number,
            FieldId::Complement => &self.address.complement,
            FieldId::Neighborhood => &self.address.neighborhood,
            FieldId::City => &self.address.city,
            FieldId::State => &self.address.state,
            FieldId::Zipcode => &self.address.zipcode,
            FieldId::Note => &self.note,
        }
    }

    /// Switching away from a non-digital option keeps the address values
    /// already typed in, so flipping back loses nothing.
    pub fn select_delivery_option(&mut self, option: DeliveryOption) {
        self.delivery_option = option;
    }

    pub fn delivery_option(&self) -> DeliveryOption {
        self.delivery_option
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Back to the empty default, used after a completed or cancelled handoff.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_option_is_digital() {
        let draft = OrderDraft::new();
        assert_eq!(draft.delivery_option(), DeliveryOption::Digital);
    }

    #[test]
    fn set_field_is_last_write_wins() {
        let mut draft = OrderDraft::new();
        draft.set_field(FieldId::Name, "Maria");
        draft.set_field(FieldId::Name, "Maria Silva");
        assert_eq!(draft.field(FieldId::Name), "Maria Silva");
    }

    #[test]
    fn switching_option_keeps_address_values() {
        let mut draft = OrderDraft::new();
        draft.select_delivery_option(DeliveryOption::Printed);
        draft.set_field(FieldId::Street, "Rua das Flores");
        draft.select_delivery_option(DeliveryOption::Digital);
        draft.select_delivery_option(DeliveryOption::Printed);
        assert_eq!(draft.field(FieldId::Street), "Rua das Flores");
    }

    #[test]
    fn reset_clears_everything() {
        let mut draft = OrderDraft::new();
        draft.set_field(FieldId::Email, "maria@example.com");
        draft.select_delivery_option(DeliveryOption::Combo);
        draft.reset();
        assert_eq!(draft, OrderDraft::new());
    }
}
