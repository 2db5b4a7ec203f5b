//! Command to classify paths by syntax.

use crate::error::CliError;
use crate::utils::{build_runtime, GlobalOptions};
use clap::Args;
use std::io::{self, Write};

/// Classify paths by syntax.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Paths to classify
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl ClassifyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let runtime = build_runtime(global)?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for path in &self.paths {
            writeln!(handle, "{}", runtime.classify(path))?;
        }
        Ok(())
    }
}
