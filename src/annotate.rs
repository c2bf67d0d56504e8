/// GitHub Actions log annotations
///
/// One line per test config, written to stdout as a workflow command so
/// the CI log viewer highlights it. Severity follows the status: "error"
/// is an error annotation, "passed" is a plain line, anything else is a
/// notice.
use crate::types::{StatusKind, TestConfig};

/// Display an error annotation in the github action log
fn gh_error(msg: &str) {
    println!("::error ::{}", msg);
}

/// Display a notice annotation in the github action log
fn gh_notice(msg: &str) {
    println!("::notice ::{}", msg);
}

/// Format the log line for one test config
pub fn log_line(test_config: &TestConfig) -> String {
    format!(
        "{} : {} platform='{}' {}",
        test_config.status,
        test_config.name,
        test_config.platform,
        test_config.reason_or_blank()
    )
}

/// Emit the log line for one test config at the severity its status calls for
pub fn log_test_config(test_config: &TestConfig) {
    let msg = log_line(test_config);
    match test_config.status_kind() {
        StatusKind::Error => gh_error(&msg),
        StatusKind::Passed => println!("{}", msg),
        StatusKind::Other => gh_notice(&msg),
    }
}
