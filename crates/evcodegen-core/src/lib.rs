//! evcodegen Core
//!
//! Core types shared by the evcodegen scanner and emitter: the fixed table of
//! event-code families, the per-family member lists, the member naming rule
//! and the generator configuration.

pub mod config;
pub mod error;
pub mod family;
pub mod naming;
pub mod types;

pub use config::{DeniedMacro, GeneratorConfig, RenderOptions};
pub use error::{Error, Result};
pub use family::{FamilyRegistry, FamilySpec, FAMILIES};
pub use naming::to_member_identifier;
pub use types::*;
