//! Item catalog handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use super::dto::{ItemDto, ListItemsParams};
use crate::application::{CatalogService, ItemQuery};
use crate::domain::CatalogError;
use crate::interfaces::http::common::{ErrorResponse, PaginatedResponse, ValidatedQuery};

/// Item handler state
#[derive(Clone)]
pub struct ItemsState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    params(ListItemsParams),
    responses(
        (status = 200, description = "One page of matching items", body = PaginatedResponse<ItemDto>),
        (status = 404, description = "Page out of range", body = ErrorResponse),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse)
    )
)]
pub async fn list_items(
    State(state): State<ItemsState>,
    ValidatedQuery(params): ValidatedQuery<ListItemsParams>,
) -> Result<Json<PaginatedResponse<ItemDto>>, CatalogError> {
    let query = ItemQuery::from(params);

    match state.catalog.query(&query) {
        Ok(page) => {
            metrics::counter!("catalog_queries_total", "outcome" => "ok").increment(1);
            Ok(Json(PaginatedResponse::from(page)))
        }
        Err(err) => {
            let CatalogError::PageOutOfRange { page, total_pages } = &err;
            debug!(page, total_pages, search = ?query.search, "Requested page out of range");
            metrics::counter!("catalog_queries_total", "outcome" => "out_of_range").increment(1);
            Err(err)
        }
    }
}
