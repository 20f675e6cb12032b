//! Customers

pub mod data;
pub mod errors;
pub mod mapper;
pub mod models;
pub mod records;
mod repository;
pub mod service;
pub mod sorting;
pub mod uniqueness;

pub use errors::CustomersServiceError;
pub use service::*;
