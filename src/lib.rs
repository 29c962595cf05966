//! Core library exports for the board game reviews API.
//!
//! The `data` feature exposes the persistence layer (`domain`, `models`,
//! `schema`, `repository`, `db`, `seed`); the default `server` feature adds
//! forms, DTOs, services and Actix-web routes.

pub mod db;
pub mod domain;
mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
