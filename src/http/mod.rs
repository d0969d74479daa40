//! Typed GET layer: URL building, status classification and error folding.

mod error;
mod gateway;
mod request;
mod response;
mod status;

pub use error::{ErrorType, HttpError};
pub use gateway::Gateway;
pub use request::{HttpRequest, Query};
pub use response::{HttpResponse, HttpResult};
pub use status::{Category, Status, classify};
