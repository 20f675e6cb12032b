//! Extension traits

mod depot;
mod paging;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use paging::PagingExt as _;
pub(crate) use result::ResultExt as _;
