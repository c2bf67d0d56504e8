/// Core data structures for twister results
///
/// This module defines the shape of the twister.json document and the
/// status classification shared by the markdown and console renderings.

/// Top-level shape of a twister.json results file
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TwisterResults {
    /// All test configurations, in the order twister ran them
    pub testsuites: Vec<TestConfig>,
}

/// Outcome of running one scenario on one platform
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TestConfig {
    pub name: String,
    pub platform: String,
    pub status: String,
    pub reason: Option<String>,
}

impl TestConfig {
    /// Classify the open-ended status string into the three cases the
    /// renderings care about
    pub fn status_kind(&self) -> StatusKind {
        match self.status.as_str() {
            "passed" => StatusKind::Passed,
            "error" => StatusKind::Error,
            _ => StatusKind::Other,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == "passed"
    }

    /// Failure reason; a missing field renders as a single space
    pub fn reason_or_blank(&self) -> &str {
        self.reason.as_deref().unwrap_or(" ")
    }

    /// Markdown table cell for the status column
    pub fn status_cell(&self) -> String {
        match self.status_kind() {
            StatusKind::Passed => format!(":heavy_check_mark: {}", self.status),
            StatusKind::Error => format!(":x: {}", self.status),
            StatusKind::Other => self.status.clone(),
        }
    }
}

/// Three-way classification of a test config status
///
/// "passed" and "error" get dedicated renderings; everything else
/// (skipped, filtered, ...) is reported verbatim at notice severity but
/// still counts against the aggregate status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Passed,
    Error,
    Other,
}
