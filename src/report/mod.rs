//! Report generation module - row building and table export.
//!
//! This module handles:
//! - Building display rows (with elision) from a profile
//! - Export to CSV and YAML formats
//!
//! Chart output is handled by the chart module.
//!
//! # Module Organization
//!
//! - `types` - Row model and column descriptors
//! - `build` - Row construction from a profile
//! - `export` - CSV and YAML renderers

mod build;
mod export;
mod types;

pub use types::Row;

pub use build::build_rows;

pub use export::{render_csv, render_markup};
