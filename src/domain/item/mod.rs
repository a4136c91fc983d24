//! Item aggregate
//!
//! Contains the catalog Item entity and its read-only repository interface.

pub mod model;
pub mod repository;

pub use model::{Item, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
pub use repository::ItemRepository;
