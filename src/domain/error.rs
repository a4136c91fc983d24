//! Domain errors

use thiserror::Error;

/// Errors raised by catalog queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Page out of range")]
    PageOutOfRange { page: u64, total_pages: u64 },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
