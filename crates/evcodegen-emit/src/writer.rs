//! Artifact writer

use std::fs;
use std::path::Path;

use evcodegen_core::{Error, Result};
use tracing::info;

use crate::render::RenderedArtifacts;

/// Write the declaration and then the definition file, replacing any
/// existing content
///
/// A failure on either file is returned immediately. The declaration file
/// may already have been replaced when the definition write fails.
pub fn write_artifacts(
    artifacts: &RenderedArtifacts,
    declaration_path: &Path,
    definition_path: &Path,
) -> Result<()> {
    write_file(declaration_path, &artifacts.declaration)?;
    write_file(definition_path, &artifacts.definition)?;
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, contents).map_err(write_error)?;

    info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
