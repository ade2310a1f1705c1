//! Renders the order summary handed off over WhatsApp.
//!
//! The layout is fixed and the output is the literal message text, not yet
//! URL-encoded. Optional fields fall back to `N/A`.
use super::draft::{FieldId, OrderDraft};

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

/// Human-readable order summary for a draft. Total over any draft, valid
/// or not; callers gate it behind validation.
pub fn format(draft: &OrderDraft) -> String {
    let mut message =
        String::from("Olá gostaria de adquirir o livro As Vírgulas de Deus.\n\nMeus Dados:\n");
    message.push_str(&format!("Nome: {}\n", draft.field(FieldId::Name)));
    message.push_str(&format!("Email: {}\n", draft.field(FieldId::Email)));
    message.push_str(&format!("Telefone: {}\n", or_na(draft.field(FieldId::Phone))));
    message.push_str(&format!("Opção: {}", draft.delivery_option().display_label()));

    if draft.delivery_option().needs_address() {
        let address = draft.address();
        message.push_str("\n\nEndereço de Entrega:\n");
        message.push_str(&format!("Rua: {}, Nº: {}\n", address.street, address.number));
        message.push_str(&format!("Complemento: {}\n", or_na(&address.complement)));
        message.push_str(&format!("Bairro: {}\n", address.neighborhood));
        message.push_str(&format!("Cidade: {}, Estado: {}\n", address.city, address.state));
        message.push_str(&format!("CEP: {}", address.zipcode));
    }

    message
}
