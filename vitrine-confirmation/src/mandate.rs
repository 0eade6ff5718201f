use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::json;
use vitrine_locale::Message;

/// The one method whose mandate must never be presented as a link.
const SEPA_METHOD: &str = "SEPA Direct Debit (via Checkout.com)";

/// Provider display name → message-id suffix for the mandate disclosure.
static MANDATES_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("Stripe (SEPA)", "sepa_link_text");
    map.insert("OXXO (via Checkout.com)", "oxxo_link_text");
    map.insert("Boleto Bancário (via Checkout.com)", "boleto_link_text");
    map.insert(SEPA_METHOD, "mandate_text_only");
    map
});

/// Suffix for providers with no dedicated mandate copy.
const DEFAULT_MANDATE_SUFFIX: &str = "mandate_link_text";

/// Methods whose mandate is always disclosed as text, even when a URL exists.
static TEXT_ONLY_METHODS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from([SEPA_METHOD]));

/// How the mandate disclosure appears on the confirmation page.
///
/// Exactly one of the two is produced per order. Serializes with a "mode"
/// flag so the template layer can branch without inspecting variants.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MandateDisclosure {
    /// Inline text; used when linking out is not possible or not allowed.
    Text { message: Message },
    /// Outbound link to the hosted mandate document.
    Link { message: Message, url: String },
}

impl MandateDisclosure {
    /// The message carried by either disclosure form.
    pub fn message(&self) -> &Message {
        match self {
            Self::Text { message } => message,
            Self::Link { message, .. } => message,
        }
    }
}

/// Decides which mandate disclosure an order gets.
pub struct MandatePolicy;

impl MandatePolicy {
    /// Message-id suffix for a provider.
    ///
    /// Unknown and missing providers fall back to the generic copy; new
    /// payment methods need no code change to get a disclosure.
    pub fn message_suffix(provider: Option<&str>) -> &'static str {
        match provider.and_then(|name| MANDATES_MAP.get(name).copied()) {
            Some(suffix) => suffix,
            None => {
                tracing::debug!(
                    "No mandate copy registered for provider {:?}, using the default disclosure",
                    provider
                );
                DEFAULT_MANDATE_SUFFIX
            }
        }
    }

    /// Pick the disclosure for an order's provider and mandate URL.
    ///
    /// Text when the provider is text-only or no usable URL exists; link
    /// otherwise. An empty URL counts as absent.
    pub fn resolve(provider: Option<&str>, mandate_url: Option<&str>) -> MandateDisclosure {
        let id = format!("order_confirmation.{}", Self::message_suffix(provider));
        let provider_name = provider.unwrap_or_default();
        let url = mandate_url.filter(|url| !url.is_empty());

        match url {
            Some(url) if !Self::is_text_only(provider) => MandateDisclosure::Link {
                message: Message::plain(&id).with_data(json!({ "provider": provider_name })),
                url: url.to_string(),
            },
            _ => MandateDisclosure::Text {
                message: Message::plain(&id).with_data(json!({
                    "provider": provider_name,
                    "mandate": url.unwrap_or(""),
                })),
            },
        }
    }

    fn is_text_only(provider: Option<&str>) -> bool {
        provider.is_some_and(|name| TEXT_ONLY_METHODS.contains(name))
    }
}
