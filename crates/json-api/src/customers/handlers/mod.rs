//! Customer Handlers

pub(crate) mod address;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod mobile;
pub(crate) mod paging;
pub(crate) mod purge;
pub(crate) mod raw;
pub(crate) mod search;
pub(crate) mod status;
pub(crate) mod update;
