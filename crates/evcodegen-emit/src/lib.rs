//! evcodegen Emitter
//!
//! Renders scanned event-code families into a C++ header declaring one
//! transparent `std::uint16_t` wrapper per family and a source file defining
//! its members and value-to-name lookup, then writes both to disk.
//!
//! ## Modules
//!
//! - `templates` - C++ text templates and placeholder substitution
//! - `render` - Per-member, per-family and per-file rendering
//! - `writer` - Writing the rendered files

pub mod render;
pub mod templates;
pub mod writer;

pub use render::{render, RenderedArtifacts};
pub use writer::write_artifacts;
