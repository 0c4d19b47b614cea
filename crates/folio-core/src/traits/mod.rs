//! Collaborator traits defined in `folio-core` and implemented by other crates.

pub mod renderer;
pub mod slice_source;

pub use renderer::Renderer;
pub use slice_source::SliceSource;
