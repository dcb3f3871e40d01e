//! Domain layer for the todolist backend
//!
//! This module contains the item model, configuration model and the port
//! traits that adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
