//! Endpoint logic.
//!
//! Services receive raw path segments and JSON bodies, apply the validation
//! steps in the order clients rely on, and talk to the store only through
//! repository traits so they can be exercised against the in-memory test
//! repository.

pub mod categories;
pub mod comments;
pub mod errors;
pub mod messages;
pub mod reviews;
pub mod users;

pub use errors::{ServiceError, ServiceResult};
