//! Chart rendering
//!
//! Rows are written as CSV to a transient file and handed to a
//! `ChartRenderer`. The image is drawn into a temporary sibling of the
//! destination and only renamed into place once the renderer succeeds.

use crate::error::Result;
use crate::plotter::ChartRenderer;
use crate::report::{Row, render_csv};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render `rows` as a chart at `destination`.
///
/// Both the transient CSV and the staging image are removed on every exit
/// path. On failure the destination is left untouched.
pub fn render_chart(destination: &Path, rows: &[Row], renderer: &dyn ChartRenderer) -> Result<()> {
    let mut data = tempfile::Builder::new().prefix("birthday-").suffix(".csv").tempfile()?;
    render_csv(rows, data.as_file_mut())?;
    data.flush()?;

    debug!("Wrote {} chart rows to {}", rows.len(), data.path().display());

    let parent = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let suffix = destination.extension().map(|ext| format!(".{}", ext.to_string_lossy())).unwrap_or_default();
    let staged = tempfile::Builder::new().prefix(".birthday-chart-").suffix(&suffix).tempfile_in(parent)?;

    renderer.render_vector_chart(data.path(), staged.path())?;

    // Staged files are owner-only; keep the destination's mode or use 0644
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(destination).map(|m| m.permissions().mode() & 0o777).unwrap_or(0o644);
        fs::set_permissions(staged.path(), fs::Permissions::from_mode(mode))?;
    }

    staged.persist(destination).map_err(|e| e.error)?;
    debug!("Chart written to {}", destination.display());

    Ok(())
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;
