use serde::{Deserialize, Serialize};

use crate::CheckoutResult;

/// Order status as reported by the checkout SDK.
///
/// The confirmation page only gives dedicated treatment to the four statuses
/// below; any other wire value is kept verbatim in `Other` and falls through
/// to the generic presentation branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    ManualVerificationRequired,
    AwaitingPayment,
    Pending,
    Incomplete,
    Other(String),
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "MANUAL_VERIFICATION_REQUIRED" => Self::ManualVerificationRequired,
            "AWAITING_PAYMENT" => Self::AwaitingPayment,
            "PENDING" => Self::Pending,
            "INCOMPLETE" => Self::Incomplete,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl OrderStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::ManualVerificationRequired => "MANUAL_VERIFICATION_REQUIRED",
            Self::AwaitingPayment => "AWAITING_PAYMENT",
            Self::Pending => "PENDING",
            Self::Incomplete => "INCOMPLETE",
            Self::Other(raw) => raw,
        }
    }
}

/// A payment recorded against the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayment {
    /// Display name of the payment method, e.g. "Stripe (SEPA)".
    pub description: String,
}

/// The customer's purchase as returned by the checkout SDK.
///
/// Read-only on this side: the SDK sends a camelCase JSON payload and extra
/// fields it may add over time are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: u64,
    pub status: OrderStatus,
    #[serde(default)]
    pub mandate_url: Option<String>,
    #[serde(default)]
    pub has_digital_items: bool,
    #[serde(default)]
    pub is_downloadable: bool,
    #[serde(default)]
    pub payments: Vec<OrderPayment>,
}

impl Order {
    /// Parse an order payload as delivered by the checkout SDK.
    pub fn from_json(payload: &str) -> CheckoutResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Display name of the method that paid for this order.
    ///
    /// Taken from the first recorded payment. An order with no payments has
    /// no provider; downstream lookups fall back to their defaults.
    pub fn mandate_provider(&self) -> Option<&str> {
        self.payments.first().map(|payment| payment.description.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CheckoutError;

    #[test]
    fn test_parse_sdk_payload() {
        let order = Order::from_json(
            r#"{
                "orderId": 1001,
                "status": "PENDING",
                "mandateUrl": "https://processor.example/mandates/m-1001",
                "hasDigitalItems": true,
                "isDownloadable": false,
                "payments": [{ "description": "Stripe (SEPA)" }]
            }"#,
        )
        .unwrap();

        assert_eq!(order.order_id, 1001);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(
            order.mandate_url.as_deref(),
            Some("https://processor.example/mandates/m-1001")
        );
        assert!(order.has_digital_items);
        assert!(!order.is_downloadable);
        assert_eq!(order.mandate_provider(), Some("Stripe (SEPA)"));
    }

    #[test]
    fn test_unrecognized_status_kept_verbatim() {
        let order = Order::from_json(r#"{ "orderId": 7, "status": "SHIPPED" }"#).unwrap();

        assert_eq!(order.status, OrderStatus::Other("SHIPPED".to_string()));
        assert_eq!(order.status.as_str(), "SHIPPED");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let order = Order::from_json(r#"{ "orderId": 7, "status": "AWAITING_PAYMENT" }"#).unwrap();

        assert_eq!(order.mandate_url, None);
        assert!(!order.has_digital_items);
        assert!(!order.is_downloadable);
        assert!(order.payments.is_empty());
        assert_eq!(order.mandate_provider(), None);
    }

    #[test]
    fn test_extra_sdk_fields_ignored() {
        let order = Order::from_json(
            r#"{ "orderId": 7, "status": "PENDING", "currency": "EUR", "customerCanBeCreated": true }"#,
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let result = Order::from_json(r#"{ "status": "PENDING" }"#);

        assert!(matches!(result, Err(CheckoutError::InvalidPayload(_))));
    }

    #[test]
    fn test_status_round_trip() {
        let serialized = serde_json::to_string(&OrderStatus::ManualVerificationRequired).unwrap();
        assert_eq!(serialized, r#""MANUAL_VERIFICATION_REQUIRED""#);

        let serialized = serde_json::to_string(&OrderStatus::Other("DISPUTED".to_string())).unwrap();
        assert_eq!(serialized, r#""DISPUTED""#);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::from_json(r#"{ "orderId": 99, "status": "INCOMPLETE" }"#).unwrap();
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["orderId"], 99);
        assert_eq!(value["status"], "INCOMPLETE");
        assert_eq!(value["hasDigitalItems"], false);
    }
}
