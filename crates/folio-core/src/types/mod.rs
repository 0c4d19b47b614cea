//! Core type definitions used across the Folio workspace.

pub mod item;
pub mod navigation;
pub mod pagination;

pub use item::ListingItem;
pub use navigation::{LinkRel, NavLink, Navigation};
pub use pagination::{PageRequest, PageResult};
