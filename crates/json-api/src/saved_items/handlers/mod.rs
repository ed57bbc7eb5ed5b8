//! Saved Item Handlers
//!
//! Each operation exposes one endpoint per list so the routes document
//! themselves separately.

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
