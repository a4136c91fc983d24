//! HTTP REST API interfaces
//!
//! - `common`: Error/pagination bodies and the validated query extractor
//! - `modules`: Endpoint handlers and middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, ApiState};
