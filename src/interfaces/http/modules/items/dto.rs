//! Item DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::ItemQuery;
use crate::domain::Item;
use crate::support::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Catalog item as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: u32,
    pub name: String,
    /// `null` when the item has no description
    pub description: Option<String>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

/// Query parameters for `GET /items`
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsParams {
    /// 1-based page index
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    #[param(minimum = 1)]
    pub page: u64,
    /// Number of items per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: u32,
    /// Case-insensitive search in name or description
    pub search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl From<ListItemsParams> for ItemQuery {
    fn from(params: ListItemsParams) -> Self {
        debug_assert!(params.page_size <= MAX_PAGE_SIZE);
        let query = ItemQuery::new(params.page, params.page_size);
        match params.search {
            Some(search) => query.with_search(search),
            None => query,
        }
    }
}
