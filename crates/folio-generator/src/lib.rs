//! # folio-generator
//!
//! Materialises every page of a listing: asks a [`SliceSource`] for each
//! page's window, hands the entries and navigation to a [`Renderer`], and
//! optionally writes the resulting documents to disk.
//!
//! [`SliceSource`]: folio_core::traits::SliceSource
//! [`Renderer`]: folio_core::traits::Renderer

pub mod generator;
pub mod memory;
pub mod render;
pub mod writer;

pub use generator::{GeneratedPage, ListingGenerator};
pub use memory::MemorySource;
pub use render::{JsonRenderer, ListingDocument};
pub use writer::DocumentWriter;
