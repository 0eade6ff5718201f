use std::collections::HashMap;

use serde_json::Value;

/// The translation service consumed by presentation components.
///
/// Resolution never fails: implementations degrade to something readable for
/// ids they do not know.
pub trait Translator {
    fn translate(&self, id: &str, data: &Value) -> String;
}

/// In-memory message catalog with `{placeholder}` interpolation.
///
/// Language packs arrive as flat JSON objects of message id → template, the
/// same shape the storefront serves to its locale layer.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(templates: HashMap<String, String>) -> Self {
        Self { templates }
    }

    /// Load a language pack from its JSON document.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(document)?;
        let entries = match root {
            Value::Object(entries) => entries,
            _ => return Err(CatalogError::NotAnObject),
        };

        let mut templates = HashMap::new();
        for (id, template) in entries {
            match template {
                Value::String(template) => {
                    templates.insert(id, template);
                }
                _ => return Err(CatalogError::NotATemplate { id }),
            }
        }

        Ok(Self { templates })
    }

    /// Built-in English copy for the order-confirmation page.
    pub fn english() -> Self {
        let entries = [
            (
                "order_confirmation.order_number_text",
                "Your order number is {orderNumber}",
            ),
            (
                "order_confirmation.order_pending_review_text",
                "Your order was received and will be completed once your payment has been verified.",
            ),
            (
                "order_confirmation.order_pending_status_text",
                "Your order {orderNumber} is pending. If the status does not update shortly, contact us at {supportEmail}.",
            ),
            (
                "order_confirmation.order_incomplete_status_text",
                "Your order {orderNumber} could not be completed. Contact us at {supportEmail} to finish your purchase.",
            ),
            (
                "order_confirmation.order_with_support_number_text",
                "A confirmation email for order {orderNumber} is on its way. If you have any questions, email us at {supportEmail} or call us on {supportPhoneNumber}.",
            ),
            (
                "order_confirmation.order_without_support_number_text",
                "A confirmation email for order {orderNumber} is on its way. If you have any questions, email us at {supportEmail}.",
            ),
            (
                "order_confirmation.sepa_link_text",
                "View your SEPA Direct Debit mandate",
            ),
            ("order_confirmation.oxxo_link_text", "View your OXXO voucher"),
            ("order_confirmation.boleto_link_text", "View your boleto"),
            (
                "order_confirmation.mandate_text_only",
                "{provider} mandate reference: {mandate}",
            ),
            (
                "order_confirmation.mandate_link_text",
                "View the mandate for your {provider} payment",
            ),
            (
                "order_confirmation.order_with_downloadable_digital_items_text",
                "Your order includes digital items. Download links are in your confirmation email.",
            ),
            (
                "order_confirmation.order_without_downloadable_digital_items_text",
                "Your order includes digital items, which become available once your payment has cleared.",
            ),
        ];

        let templates = entries
            .iter()
            .map(|(id, template)| (id.to_string(), template.to_string()))
            .collect();

        Self { templates }
    }

    /// Whether the catalog carries a template for this id.
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, id: &str, data: &Value) -> String {
        match self.templates.get(id) {
            Some(template) => interpolate(template, data),
            None => {
                tracing::debug!("No template for message id {}, echoing the id", id);
                id.to_string()
            }
        }
    }
}

/// Replace `{placeholder}` tokens with values from the payload.
///
/// Tokens with no matching value are left verbatim.
fn interpolate(template: &str, data: &Value) -> String {
    let values = match data.as_object() {
        Some(values) if !values.is_empty() => values,
        _ => return template.to_string(),
    };

    let mut rendered = template.to_string();
    for (key, value) in values {
        let token = format!("{{{}}}", key);
        if rendered.contains(&token) {
            rendered = rendered.replace(&token, &value_text(value));
        }
    }
    rendered
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Catalog root must be a JSON object")]
    NotAnObject,

    #[error("Catalog entry {id} must be a string template")]
    NotATemplate { id: String },
}
