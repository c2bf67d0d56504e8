use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "twister-report")]
#[command(about = "Analyse a twister.json results file and generate a readable report")]
#[command(version)]
pub struct CliArgs {
    /// Path to the twister.json file generated by twister
    #[arg(value_name = "TWISTER_JSON")]
    pub twister_json: PathBuf,

    /// File the report is appended to; "-" writes to stdout
    #[arg(long = "file-report", value_name = "PATH", default_value = "-")]
    pub file_report: String,

    /// Return a non-zero exit code if one of the test configs did not pass
    #[arg(long)]
    pub fail: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}
