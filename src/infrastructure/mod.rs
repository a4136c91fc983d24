//! Infrastructure layer - external concerns

pub mod storage;

pub use storage::{InMemoryItemRepository, DEFAULT_ITEM_COUNT};
