use serde_json::json;
use vitrine_checkout::OrderStatus;
use vitrine_locale::Message;

/// Copy shown under the order number, keyed by order status.
///
/// Pure classification, no transitions. Recognized statuses get dedicated
/// copy; everything else falls through to the generic confirmation message,
/// which switches on whether a support phone number is available.
pub fn status_message(
    status: &OrderStatus,
    order_number: u64,
    support_email: &str,
    support_phone_number: Option<&str>,
) -> Message {
    match status {
        OrderStatus::ManualVerificationRequired | OrderStatus::AwaitingPayment => {
            Message::html("order_confirmation.order_pending_review_text")
        }

        OrderStatus::Pending => Message::html("order_confirmation.order_pending_status_text")
            .with_data(json!({
                "orderNumber": order_number,
                "supportEmail": support_email,
            })),

        OrderStatus::Incomplete => Message::html("order_confirmation.order_incomplete_status_text")
            .with_data(json!({
                "orderNumber": order_number,
                "supportEmail": support_email,
            })),

        OrderStatus::Other(_) => {
            let mut data = json!({
                "orderNumber": order_number,
                "supportEmail": support_email,
            });
            let id = match support_phone_number {
                Some(phone) => {
                    data["supportPhoneNumber"] = json!(phone);
                    "order_confirmation.order_with_support_number_text"
                }
                None => "order_confirmation.order_without_support_number_text",
            };
            Message::html(id).with_data(data)
        }
    }
}
