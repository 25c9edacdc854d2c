/// Configuration resolution module
///
/// This module handles:
/// - Reading chart settings from the environment
/// - Applying defaults for unset or empty variables
use log::debug;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Overrides the chart destination path
pub const SVG_PATH_VAR: &str = "BIRTHDAY_SVG_PATH";

/// Overrides the plotting script
pub const PLOT_SCRIPT_VAR: &str = "BIRTHDAY_PLOT_SCRIPT";

/// Overrides the interpreter that runs the plotting script
pub const PYTHON_VAR: &str = "BIRTHDAY_PYTHON";

pub const DEFAULT_SVG_PATH: &str = "birthday.svg";

pub const DEFAULT_PYTHON: &str = "python3";

/// Resolved chart settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub destination: PathBuf,
    pub interpreter: OsString,
    /// Explicit script; when None the plotter searches for one
    pub script: Option<PathBuf>,
}

impl ChartConfig {
    /// Resolve settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Resolve settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let config = ChartConfig {
            destination: get(SVG_PATH_VAR).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_SVG_PATH)),
            interpreter: get(PYTHON_VAR).unwrap_or_else(|| OsString::from(DEFAULT_PYTHON)),
            script: get(PLOT_SCRIPT_VAR).map(PathBuf::from),
        };

        debug!("Chart config: {:?}", config);
        config
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
