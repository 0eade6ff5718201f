pub mod catalog;
pub mod message;

pub use catalog::{CatalogError, MessageCatalog, Translator};
pub use message::{Message, MessageFormat};
