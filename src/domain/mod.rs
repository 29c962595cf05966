//! Domain entities and value objects shared by the repository and service layers.

pub mod category;
pub mod comment;
pub mod review;
pub mod types;
pub mod user;
