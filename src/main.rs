// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod chart;
mod cli;
mod config;
mod error;
mod plotter;
mod probability;
mod profile;
mod report;
mod ui;

use clap::Parser;
use cli::OutputFormat;
use config::ChartConfig;
use error::Result;
use log::debug;
use plotter::PythonPlotter;
use std::io::{self, Write};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse();

    if let Err(e) = run(&args) {
        ui::print_error(&e.to_string());
        if e.is_usage() {
            ui::print_usage();
        }
        std::process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<()> {
    let format = args.output_format()?;
    let profile = format.profile();

    debug!("Rendering {} from the {} profile", format, profile.as_str());

    let rows = report::build_rows(&profile.spec())?;

    match format {
        OutputFormat::Csv => {
            let mut out = io::stdout().lock();
            report::render_csv(&rows, &mut out)?;
            out.flush()?;
        }
        OutputFormat::Yaml => {
            let mut out = io::stdout().lock();
            report::render_markup(&rows, &mut out)?;
            out.flush()?;
        }
        OutputFormat::Svg => {
            let config = ChartConfig::from_env();
            let plotter = PythonPlotter::new(&config);
            chart::render_chart(&config.destination, &rows, &plotter)?;
            ui::status(&format!("Chart written to {}", config.destination.display()));
        }
    }

    Ok(())
}
