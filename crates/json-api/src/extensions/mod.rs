//! Extension traits

mod depot;
mod principal;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use principal::PrincipalExt as _;
pub(crate) use result::ResultExt as _;
