pub mod categories;
pub mod errors;
pub mod selection;
pub mod snapshot;

pub use errors::{ServiceError, ServiceResult};
