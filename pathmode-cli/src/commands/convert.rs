//! Command to convert paths into the active mode's namespace.

use crate::error::CliError;
use crate::utils::{build_runtime, write_json, GlobalOptions, OutputFormat};
use clap::Args;
use pathmode::{ConvertedPath, ExecutionMode};
use serde::Serialize;
use std::io::{self, Write};

/// Convert paths into the active mode's namespace.
#[derive(Args)]
pub struct ConvertCommand {
    /// Paths to convert
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Convert for this mode instead of the detected one
    #[arg(long = "as", value_enum, value_name = "MODE")]
    pub target: Option<ExecutionMode>,

    /// Show the classification and rule behind each conversion
    #[arg(long)]
    pub explain: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ConversionReport<'a> {
    input: &'a str,
    #[serde(flatten)]
    converted: ConvertedPath,
}

impl ConvertCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let runtime = build_runtime(global)?;

        let reports: Vec<ConversionReport<'_>> = self
            .paths
            .iter()
            .map(|input| ConversionReport {
                input: input.as_str(),
                converted: match self.target {
                    Some(mode) => runtime.convert_path_as(input, mode),
                    None => runtime.convert_path_detailed(input),
                },
            })
            .collect();

        if self.format == OutputFormat::Json {
            return write_json(&reports);
        }

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for report in &reports {
            let converted = &report.converted;
            if self.explain {
                writeln!(
                    handle,
                    "{}\t{}\t{}\t{}",
                    report.input, converted.path, converted.syntax, converted.rule
                )?;
            } else {
                writeln!(handle, "{}", converted.path)?;
            }
        }
        Ok(())
    }
}
