//! Catalog use cases: search and pagination over the item catalog

pub mod query;
pub mod service;

pub use query::ItemQuery;
pub use service::CatalogService;
