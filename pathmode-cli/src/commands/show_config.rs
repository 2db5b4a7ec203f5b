//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, write_json, GlobalOptions};
use clap::{Args, ValueEnum};

/// Serialization format for the configuration dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

/// Show the effective configuration after every source is merged.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ConfigFormat::Yaml)]
    pub format: ConfigFormat,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        match self.format {
            ConfigFormat::Json => write_json(&config),
            ConfigFormat::Yaml => {
                let yaml = serde_yaml::to_string(&config).map_err(pathmode::Error::from)?;
                print!("{yaml}");
                Ok(())
            }
        }
    }
}
