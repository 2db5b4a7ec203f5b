//! Command to show the detected execution mode.

use crate::error::CliError;
use crate::utils::{build_runtime, write_json, GlobalOptions, OutputFormat};
use clap::Args;
use std::io::{self, Write};

/// Show the detected execution mode.
#[derive(Args)]
pub struct ModeCommand {
    /// Include the evidence each detection tier observed
    #[arg(long)]
    pub evidence: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ModeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut global = global.clone();
        // Evidence is only recorded in debug mode.
        global.debug |= self.evidence;

        let runtime = build_runtime(&global)?;
        let detection = runtime.detection();

        if self.format == OutputFormat::Json {
            return write_json(detection);
        }

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{} ({})", detection.mode, detection.method)?;
        if self.evidence {
            for item in runtime.evidence().unwrap_or_default() {
                writeln!(handle, "  {item}")?;
            }
        }
        Ok(())
    }
}
