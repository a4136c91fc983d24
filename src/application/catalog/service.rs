//! Catalog query engine

use std::sync::Arc;

use tracing::debug;

use super::query::ItemQuery;
use crate::domain::{CatalogError, CatalogResult, Item, ItemRepository};
use crate::support::pagination::PaginatedResult;

/// Read-only query service over the item catalog.
///
/// Every query is a pure computation over the immutable backing sequence,
/// so a single instance is shared by all request handlers without locking.
pub struct CatalogService {
    repo: Arc<dyn ItemRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    /// Number of items in the backing catalog
    pub fn item_count(&self) -> usize {
        self.repo.len()
    }

    /// Filter the catalog by `query.search` and return the requested page.
    ///
    /// An empty filtered set always yields an empty page with zero pages,
    /// whatever page was requested. Otherwise a page past the last one fails
    /// with [`CatalogError::PageOutOfRange`].
    pub fn query(&self, query: &ItemQuery) -> CatalogResult<PaginatedResult<Item>> {
        let filtered: Vec<&Item> = match query.needle() {
            Some(needle) => self
                .repo
                .all()
                .iter()
                .filter(|item| item.matches(&needle))
                .collect(),
            None => self.repo.all().iter().collect(),
        };

        let request = query.page;
        let total_items = filtered.len() as u64;
        if total_items == 0 {
            debug!(search = ?query.search, "Catalog query matched no items");
            return Ok(PaginatedResult::empty(request));
        }

        let total_pages = request.total_pages(total_items);
        if request.page > total_pages {
            return Err(CatalogError::PageOutOfRange {
                page: request.page,
                total_pages,
            });
        }

        let (start, end) = request.bounds(filtered.len());
        let items = filtered[start..end].iter().map(|&item| item.clone()).collect();

        debug!(
            page = request.page,
            page_size = request.page_size,
            total_items,
            "Catalog query served"
        );

        Ok(PaginatedResult::new(items, request, total_items))
    }
}

// ── Tests ──────────────────────────────────────────────────────
