//! Items module: paginated, searchable catalog listing

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
