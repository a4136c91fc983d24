//! Item storage implementations

mod memory;

pub use memory::{InMemoryItemRepository, DEFAULT_ITEM_COUNT};
