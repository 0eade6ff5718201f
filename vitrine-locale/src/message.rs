use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How translated copy is meant to be injected into the page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageFormat {
    /// Copy that may carry markup (links, line breaks).
    Html,
    /// Copy rendered as plain text.
    Plain,
}

/// A translatable message: the id the translation service resolves, plus the
/// interpolation values the resolved template needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub data: Value,
    pub format: MessageFormat,
}

impl Message {
    /// Markup message with no interpolation data.
    pub fn html(id: &str) -> Self {
        Self {
            id: id.to_string(),
            data: Value::Null,
            format: MessageFormat::Html,
        }
    }

    /// Plain-text message with no interpolation data.
    pub fn plain(id: &str) -> Self {
        Self {
            id: id.to_string(),
            data: Value::Null,
            format: MessageFormat::Plain,
        }
    }

    /// Attach the interpolation payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_constructors() {
        let message = Message::html("order_confirmation.order_number_text");
        assert_eq!(message.id, "order_confirmation.order_number_text");
        assert_eq!(message.format, MessageFormat::Html);
        assert_eq!(message.data, Value::Null);

        let message = Message::plain("order_confirmation.mandate_text_only")
            .with_data(json!({ "provider": "Stripe (SEPA)" }));
        assert_eq!(message.format, MessageFormat::Plain);
        assert_eq!(message.data["provider"], "Stripe (SEPA)");
    }
}
