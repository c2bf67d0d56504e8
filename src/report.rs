//! Report generation: markdown summary plus log annotations.
//!
//! The results file is loaded and decoded completely before any output is
//! produced, so malformed input never leaves a partial report behind.

use crate::annotate;
use crate::error::DataError;
use crate::types::{TestConfig, TwisterResults};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Markdown table header for the detailed status section
fn md_report_header() -> &'static str {
    "| status | scenario | platform | failure reason |\n| --- | --- | --- | :--- |\n"
}

/// Markdown table row for one test config
fn md_report_test_config(test_config: &TestConfig) -> String {
    format!(
        "| {} | {} | {} | {} |\n",
        test_config.status_cell(),
        test_config.name,
        test_config.platform,
        test_config.reason_or_blank()
    )
}

/// Name of the results batch, taken from the parent directory of the
/// results file (e.g. "twister-out" for "twister-out/twister.json")
fn batch_name(twister_json: &Path) -> String {
    twister_json
        .parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Analyse a twister.json results file and write the report to `out`.
///
/// Also emits one log annotation per test config to stdout, interleaved
/// with the table rows.
///
/// Returns `Ok(true)` when every test config passed, `Ok(false)` when at
/// least one did not; failing test configs are a normal outcome, only
/// unreadable or undecodable input (and sink write failures) are errors.
pub fn generate_report<W: Write>(twister_json: &Path, out: &mut W) -> Result<bool, DataError> {
    let content = fs::read_to_string(twister_json)
        .map_err(|source| DataError::Read { path: twister_json.to_path_buf(), source })?;

    let results: TwisterResults = serde_json::from_str(&content)
        .map_err(|source| DataError::Decode { path: twister_json.to_path_buf(), source })?;

    debug!("Loaded {} test configs from {}", results.testsuites.len(), twister_json.display());

    let success = results.testsuites.iter().all(TestConfig::passed);

    writeln!(out, "## {}", batch_name(twister_json))?;
    writeln!(out, "### Overall status")?;
    if success {
        writeln!(out, ":heavy_check_mark: All tests configs passed.")?;
    } else {
        writeln!(out, ":x: Failures in at least one test config.")?;
    }

    writeln!(out)?;
    writeln!(out, "### Detailed status")?;
    out.write_all(md_report_header().as_bytes())?;
    for test_config in &results.testsuites {
        out.write_all(md_report_test_config(test_config).as_bytes())?;
        annotate::log_test_config(test_config);
    }

    Ok(success)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
