//! In-memory item storage

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Item, ItemRepository};

/// Number of items generated for the demo catalog
pub const DEFAULT_ITEM_COUNT: u32 = 150;

/// Immutable, in-memory item sequence.
///
/// Built once at startup and shared read-only across request tasks.
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<[Item]>,
}

impl InMemoryItemRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Generate `count` items with ids `1..=count`, names `"Item {id}"` and
    /// descriptions `"Description for item {id}"`.
    pub fn seeded(count: u32) -> Self {
        let items: Vec<Item> = (1..=count)
            .map(|id| {
                Item::new(
                    id,
                    format!("Item {}", id),
                    Some(format!("Description for item {}", id)),
                )
            })
            .collect();

        debug!("Seeded in-memory catalog with {} items", items.len());
        Self::new(items)
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::seeded(DEFAULT_ITEM_COUNT)
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn all(&self) -> &[Item] {
        &self.items
    }
}

// ── Tests ──────────────────────────────────────────────────────
