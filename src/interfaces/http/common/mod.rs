//! Shared HTTP response types and extractors

pub mod validated_query;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CatalogError;
use crate::support::pagination::PaginatedResult;

pub use validated_query::{ValidatedQuery, ValidatedQueryRejection};

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Pair this body with a status code
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Paginated list response
///
/// Contains one page of data plus page metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Elements on the current page
    pub items: Vec<T>,
    /// Current page (1-based)
    pub page: u64,
    /// Requested page size
    pub page_size: u32,
    /// Number of elements across all pages
    pub total_items: u64,
    /// Number of pages (0 when nothing matched)
    pub total_pages: u64,
}

impl<T, U> From<PaginatedResult<T>> for PaginatedResponse<U>
where
    U: From<T>,
{
    fn from(result: PaginatedResult<T>) -> Self {
        Self {
            items: result.items.into_iter().map(U::from).collect(),
            page: result.page,
            page_size: result.page_size,
            total_items: result.total_items,
            total_pages: result.total_pages,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match self {
            CatalogError::PageOutOfRange { .. } => StatusCode::NOT_FOUND,
        };
        ErrorResponse::new(self.to_string()).with_status(status)
    }
}
