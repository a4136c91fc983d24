pub mod errors;
pub mod pagination;
pub mod shutdown;

pub use errors::ServerError;
pub use pagination::{PageRequest, PaginatedResult, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
