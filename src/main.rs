// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod annotate;
mod cli;
mod error;
mod report;
mod types;
mod ui;

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

use error::DataError;

fn main() {
    env_logger::init();

    let args = cli::CliArgs::parse_args();

    let result = if args.file_report == "-" {
        report::generate_report(&args.twister_json, &mut io::stdout())
    } else {
        run_with_file_report(&args)
    };

    match result {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("An error occurred in one of the tests configs.");
            if args.fail {
                std::process::exit(1);
            }
        }
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Append the report to the file named by `--file-report`.
///
/// The handle lives only inside this function, so it is flushed and
/// released on every exit path, including the error ones.
fn run_with_file_report(args: &cli::CliArgs) -> Result<bool, DataError> {
    let file = OpenOptions::new().create(true).append(true).open(&args.file_report)?;

    let mut out = BufWriter::new(file);
    let success = report::generate_report(&args.twister_json, &mut out)?;
    out.flush()?;

    Ok(success)
}
