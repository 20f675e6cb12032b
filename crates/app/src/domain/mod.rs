//! Patron Domain Concerns

pub mod clients;
pub mod customers;
pub mod pagination;
pub mod status;
pub mod validation;
