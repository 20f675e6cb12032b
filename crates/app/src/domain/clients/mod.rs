//! Clients

pub mod data;
pub mod errors;
pub mod mapper;
pub mod models;
pub mod records;
mod repository;
pub mod service;

pub use errors::ClientsServiceError;
pub use service::*;
