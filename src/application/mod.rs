//! Application layer - catalog use cases

pub mod catalog;

pub use catalog::{CatalogService, ItemQuery};
