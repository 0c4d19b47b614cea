//! # folio-core
//!
//! Core crate for Folio. Contains the pager that turns a listing size and a
//! page number into an item window and sibling links, the collaborator
//! traits used to fetch and render pages, configuration schemas, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Folio crates.

pub mod config;
pub mod error;
pub mod pager;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use pager::{PagePlan, compute_page};
pub use result::AppResult;
