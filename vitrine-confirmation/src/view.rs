use serde::Serialize;
use serde_json::json;
use vitrine_checkout::Order;
use vitrine_locale::{Message, Translator};

use crate::mandate::{MandateDisclosure, MandatePolicy};
use crate::status::status_message;

// Test hooks; external automation keys on these staying stable.
pub const ORDER_NUMBER_TEST_ID: &str = "order-confirmation-order-number-text";
pub const ORDER_STATUS_TEST_ID: &str = "order-confirmation-order-status-text";
pub const MANDATE_TEXT_TEST_ID: &str = "order-confirmation-mandate-text-only";
pub const MANDATE_LINK_TEST_ID: &str = "order-confirmation-mandate-link-text";
pub const DIGITAL_ITEMS_TEST_ID: &str = "order-confirmation-digital-items-text";

/// Order-number line at the top of the confirmation section.
pub fn order_number_message(order_number: u64) -> Message {
    Message::html("order_confirmation.order_number_text")
        .with_data(json!({ "orderNumber": order_number }))
}

/// Notice shown for orders containing digital items.
pub fn digital_items_notice(downloadable: bool) -> Message {
    if downloadable {
        Message::html("order_confirmation.order_with_downloadable_digital_items_text")
    } else {
        Message::html("order_confirmation.order_without_downloadable_digital_items_text")
    }
}

/// View model for the order-status section of the confirmation page.
///
/// Building it is pure and synchronous; the translation service only comes
/// into play when rendering. Blocks keep a fixed order: order number, status
/// message, mandate disclosure, digital-items notice.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConfirmationView {
    pub order_number: Message,
    pub status: Message,
    pub mandate: MandateDisclosure,
    pub digital_items: Option<Message>,
}

impl ConfirmationView {
    /// Derive the view from an order and the store's support contacts.
    pub fn from_order(
        order: &Order,
        support_email: &str,
        support_phone_number: Option<&str>,
    ) -> Self {
        let digital_items = if order.has_digital_items {
            Some(digital_items_notice(order.is_downloadable))
        } else {
            None
        };

        Self {
            order_number: order_number_message(order.order_id),
            status: status_message(
                &order.status,
                order.order_id,
                support_email,
                support_phone_number,
            ),
            mandate: MandatePolicy::resolve(
                order.mandate_provider(),
                order.mandate_url.as_deref(),
            ),
            digital_items,
        }
    }

    /// Resolve every block's copy through the translation service.
    pub fn render(&self, translator: &dyn Translator) -> Vec<RenderedBlock> {
        let mut blocks = vec![
            block(ORDER_NUMBER_TEST_ID, &self.order_number, translator),
            block(ORDER_STATUS_TEST_ID, &self.status, translator),
        ];

        match &self.mandate {
            MandateDisclosure::Text { message } => {
                blocks.push(block(MANDATE_TEXT_TEST_ID, message, translator));
            }
            MandateDisclosure::Link { message, url } => {
                let mut linked = block(MANDATE_LINK_TEST_ID, message, translator);
                linked.href = Some(url.clone());
                blocks.push(linked);
            }
        }

        if let Some(notice) = &self.digital_items {
            blocks.push(block(DIGITAL_ITEMS_TEST_ID, notice, translator));
        }

        blocks
    }
}

/// One displayed block of the confirmation section.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderedBlock {
    pub test_id: &'static str,
    pub body: String,
    /// Link target; only the mandate-link block carries one.
    pub href: Option<String>,
}

fn block(test_id: &'static str, message: &Message, translator: &dyn Translator) -> RenderedBlock {
    RenderedBlock {
        test_id,
        body: translator.translate(&message.id, &message.data),
        href: None,
    }
}
