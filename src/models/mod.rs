//! Diesel row models and their conversions into domain entities.

pub mod category;
pub mod comment;
pub mod config;
pub mod review;
pub mod user;
