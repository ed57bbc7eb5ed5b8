//! Saved Items
//!
//! Cart and wishlist entries share one shape and one set of rules, and differ
//! only in the collection they live in.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use data::SavedList;
pub use errors::SavedItemsServiceError;
pub use service::*;
