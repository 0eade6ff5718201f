pub mod order;

pub use order::{Order, OrderPayment, OrderStatus};

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Invalid order payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

pub type CheckoutResult<T> = Result<T, CheckoutError>;
