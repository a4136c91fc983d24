//! Domain layer: catalog entities, repository traits and errors

pub mod error;
pub mod item;

pub use error::{CatalogError, CatalogResult};
pub use item::{Item, ItemRepository};
