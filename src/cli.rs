use crate::error::{BirthdayError, Result};
use crate::profile::Profile;
use clap::Parser;
use std::fmt;
use std::str::FromStr;

#[derive(Parser, Debug, Clone)]
#[command(name = "birthday-table")]
#[command(about = "Probability that people in a room share a birthday, as CSV, YAML or an SVG chart")]
#[command(version)]
pub struct CliArgs {
    /// Output format: csv, yaml or svg
    ///
    /// csv and yaml are written to stdout. svg writes a chart to
    /// $BIRTHDAY_SVG_PATH (default: birthday.svg).
    #[arg(value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Yaml,
    Svg,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Svg => "svg",
        }
    }

    /// Which row profile feeds this format
    pub fn profile(self) -> Profile {
        match self {
            OutputFormat::Csv | OutputFormat::Yaml => Profile::Table,
            OutputFormat::Svg => Profile::Chart,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = BirthdayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "yaml" => Ok(OutputFormat::Yaml),
            "svg" | "chart" => Ok(OutputFormat::Svg),
            other => Err(BirthdayError::Usage(format!("unknown format '{}' (expected csv, yaml or svg)", other))),
        }
    }
}

impl CliArgs {
    /// Validate arguments and resolve the output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.format.as_deref() {
            Some(format) => format.parse(),
            None => Err(BirthdayError::Usage("missing output format (expected csv, yaml or svg)".to_string())),
        }
    }
}
