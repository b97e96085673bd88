//! Check command implementation
//!
//! Reports the effective configuration after file and environment overrides.

use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path, config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;
    print!("{}", describe(config_path, config));
    info!("Configuration OK");
    Ok(())
}

/// Describe where settings came from and their effective values.
pub fn describe(config_path: &Path, config: &CliConfig) -> String {
    let source = if config_path.exists() {
        format!("{}", config_path.display())
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };

    format!(
        "leasebook {}\n  config file:     {}\n  format:          {}\n  log level:       {}\n  currency symbol: {}\n",
        env!("CARGO_PKG_VERSION"),
        source,
        config.format,
        config.log_level,
        config.currency_symbol
    )
}
