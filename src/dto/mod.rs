//! JSON projections returned by the API.
//!
//! Field declaration order is the key order clients see, so it must not be
//! rearranged.

pub mod categories;
pub mod comments;
pub mod reviews;
pub mod users;

use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageDto {
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
