//! Catalog query input

use crate::support::pagination::PageRequest;

/// Search and pagination parameters for one catalog query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    pub page: PageRequest,
    /// Case-insensitive substring filter over name and description
    pub search: Option<String>,
}

impl ItemQuery {
    pub fn new(page: u64, page_size: u32) -> Self {
        Self {
            page: PageRequest::new(page, page_size),
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Lower-cased search needle, if a filter was given
    pub(crate) fn needle(&self) -> Option<String> {
        self.search.as_deref().map(str::to_lowercase)
    }
}
