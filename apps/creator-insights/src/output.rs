use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::AnalysisError;

/// Writes the analysis text to `path`, replacing any previous content.
///
/// The text is staged in a temp file next to the target and renamed over it,
/// so the destination never holds a half-written analysis.
pub fn write_analysis(path: &Path, text: &str) -> Result<(), AnalysisError> {
    let output_error = |source: std::io::Error| AnalysisError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(output_error)?;
    staged.write_all(text.as_bytes()).map_err(output_error)?;
    staged.flush().map_err(output_error)?;
    set_artifact_permissions(staged.as_file()).map_err(output_error)?;
    staged.persist(path).map_err(|e| output_error(e.error))?;

    info!("Wrote {} bytes of analysis to {}", text.len(), path.display());
    Ok(())
}

/// Temp files start out owner-only; the artifact is world-readable (0644).
#[cfg(unix)]
fn set_artifact_permissions(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_artifact_permissions(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}
