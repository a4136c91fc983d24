//! # Catalog Service
//!
//! Read-only item catalog served over HTTP with case-insensitive search
//! and page-based pagination.
//!
//! ## Architecture
//!
//! - **domain**: Item entity, repository trait and catalog errors
//! - **application**: The catalog query engine (search + pagination)
//! - **infrastructure**: In-memory, immutable item storage
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: Pagination primitives, shutdown coordination, startup errors
//! - **server**: Process lifecycle shared by the CLI binary

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use application::{CatalogService, ItemQuery};
pub use domain::{CatalogError, Item, ItemRepository};
pub use infrastructure::InMemoryItemRepository;

// Re-export API router
pub use interfaces::http::create_api_router;
