pub mod mandate;
pub mod status;
pub mod view;

pub use mandate::{MandateDisclosure, MandatePolicy};
pub use status::status_message;
pub use view::{ConfirmationView, RenderedBlock};
