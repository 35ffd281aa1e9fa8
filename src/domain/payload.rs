use super::cart::{CartSnapshot, format_vnd};
use super::form::{ContactForm, FormField};
use serde::{Deserialize, Serialize};

/// Opaque entry identifiers the order-intake endpoint expects for each value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub order_details: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            name: "entry.1013124254".to_string(),
            email: "entry.153116173".to_string(),
            phone: "entry.1123782137".to_string(),
            address: "entry.1776952615".to_string(),
            order_details: "entry.684873411".to_string(),
        }
    }
}

impl FieldMapping {
    pub fn entry_for(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
        }
    }

    /// All five identifiers, contact fields first.
    pub fn entries(&self) -> [&str; 5] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.order_details,
        ]
    }
}

/// A fully composed order, ready to send. Built once per submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    fields: Vec<(String, String)>,
    details: String,
}

impl OrderPayload {
    /// The human-readable order details block.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// `(entry id, value)` pairs in submission order.
    pub fn form_pairs(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn value_of(&self, entry: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == entry)
            .map(|(_, value)| value.as_str())
    }
}

/// Renders the order details block: one `- name xN (price)` line per item,
/// a blank line, then the total. An empty cart yields only the total line.
pub fn order_details(cart: &CartSnapshot) -> String {
    let total = format!("TOTAL AMOUNT: {}₫", format_vnd(cart.total_amount));
    if cart.items.is_empty() {
        return total;
    }

    let lines = cart
        .items
        .iter()
        .map(|item| format!("- {} x{} ({})", item.name, item.quantity, item.price))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{lines}\n\n{total}")
}

pub fn compose(form: &ContactForm, cart: &CartSnapshot, mapping: &FieldMapping) -> OrderPayload {
    let details = order_details(cart);
    let mut fields: Vec<(String, String)> = FormField::ALL
        .into_iter()
        .map(|field| {
            (
                mapping.entry_for(field).to_string(),
                form.get(field).to_string(),
            )
        })
        .collect();
    fields.push((mapping.order_details.clone(), details.clone()));

    OrderPayload { fields, details }
}
