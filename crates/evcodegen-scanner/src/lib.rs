//! evcodegen Scanner
//!
//! Best-effort extraction of event-code macros from C headers. This is a
//! line scraper, not a preprocessor: conditional compilation and macro
//! expansion are ignored, and anything that does not look like a family
//! macro is skipped without error.
//!
//! ## Modules
//!
//! - `matcher` - Value and alias macro patterns
//! - `scanner` - Multi-file scanning with first-definition-wins dedup

pub mod matcher;
pub mod scanner;

pub use matcher::{AliasMacro, LineMatch, MacroMatcher, Rejection, ValueMacro};
pub use scanner::{HeaderScanner, ScanStats};

use evcodegen_core::{FamilyRegistry, GeneratorConfig, Result};
use std::path::Path;

/// Scan headers into a fresh registry
pub fn scan_headers<P: AsRef<Path>>(
    paths: &[P],
    config: &GeneratorConfig,
) -> Result<(FamilyRegistry, ScanStats)> {
    let mut registry = FamilyRegistry::new();
    let matcher = MacroMatcher::from_config(&registry, config)?;
    let mut scanner = HeaderScanner::new(matcher);
    scanner.scan_files(paths, &mut registry)?;
    Ok((registry, scanner.into_stats()))
}
