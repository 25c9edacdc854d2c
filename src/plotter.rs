//! External plotting support for birthday-table
//!
//! Charts are drawn by a Python script run as a child process. The rest of
//! the crate only sees the `ChartRenderer` trait, so tests can swap in a fake.

use crate::config::ChartConfig;
use crate::error::{BirthdayError, Result};
use log::debug;
use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// The bundled plotting script
const EMBEDDED_PLOT_SCRIPT: &str = include_str!("../plot.py");

const SCRIPT_NAME: &str = "plot.py";

/// Draws a vector chart from a CSV file of rows
pub trait ChartRenderer {
    /// Read rows from `input` and write an image to `output`, blocking until done
    fn render_vector_chart(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Runs `<interpreter> <script> <input> <output>`
#[derive(Debug, Clone)]
pub struct PythonPlotter {
    interpreter: OsString,
    script: Option<PathBuf>,
}

impl PythonPlotter {
    pub fn new(config: &ChartConfig) -> Self {
        PythonPlotter { interpreter: config.interpreter.clone(), script: config.script.clone() }
    }

    fn run_script(&self, script: &Path, input: &Path, output: &Path) -> Result<()> {
        debug!("Running {:?} {} {} {}", self.interpreter, script.display(), input.display(), output.display());

        let result = Command::new(&self.interpreter)
            .arg(script)
            .arg(input)
            .arg(output)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                BirthdayError::ExternalTool(format!("failed to run {}: {}", self.interpreter.to_string_lossy(), e))
            })?;

        let stdout = String::from_utf8_lossy(&result.stdout);
        if !stdout.trim().is_empty() {
            debug!("plot script stdout: {}", stdout.trim());
        }

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(BirthdayError::ExternalTool(format!(
                "{} exited with {}: {}",
                script.display(),
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    /// Run the bundled script from a temporary copy
    fn run_embedded_script(&self, input: &Path, output: &Path) -> Result<()> {
        let mut script = tempfile::Builder::new().prefix("birthday-plot-").suffix(".py").tempfile()?;
        script.write_all(EMBEDDED_PLOT_SCRIPT.as_bytes())?;
        script.flush()?;

        debug!("Wrote bundled plot script to {}", script.path().display());

        // Removed when `script` drops, on success or failure
        self.run_script(script.path(), input, output)
    }
}

impl ChartRenderer for PythonPlotter {
    fn render_vector_chart(&self, input: &Path, output: &Path) -> Result<()> {
        if let Some(ref script) = self.script {
            if !script.exists() {
                return Err(BirthdayError::ExternalTool(format!("plot script not found: {}", script.display())));
            }
            return self.run_script(script, input, output);
        }

        if let Some(local_script) = find_local_script() {
            debug!("Using local plot script: {}", local_script.display());
            return self.run_script(&local_script, input, output);
        }

        self.run_embedded_script(input, output)
    }
}

/// Find a local plot.py next to the working directory or the executable
fn find_local_script() -> Option<PathBuf> {
    let local = Path::new(SCRIPT_NAME);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let beside_exe = dir.join(SCRIPT_NAME);
            if beside_exe.exists() {
                return Some(beside_exe);
            }
        }
    }

    None
}
