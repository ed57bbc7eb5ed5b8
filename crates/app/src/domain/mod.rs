//! Boutique Domain Concerns

pub mod products;
pub mod saved_items;
pub mod users;
