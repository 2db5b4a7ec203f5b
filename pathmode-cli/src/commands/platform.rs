//! Command to show platform information.

use crate::error::CliError;
use crate::utils::{build_runtime, write_json, GlobalOptions, OutputFormat};
use clap::Args;

/// Show platform information.
#[derive(Args)]
pub struct PlatformCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl PlatformCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let runtime = build_runtime(global)?;
        let info = runtime.platform_info();

        match self.format {
            OutputFormat::Json => write_json(&info),
            OutputFormat::Text => {
                println!("system:  {}", info.system);
                println!("windows: {}", info.is_windows);
                println!("linux:   {}", info.is_linux);
                println!("macos:   {}", info.is_macos);
                println!("wsl:     {}", info.is_wsl);
                Ok(())
            }
        }
    }
}
