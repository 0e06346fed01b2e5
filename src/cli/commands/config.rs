//! Config command implementation.

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{default_config_path, Config};
use crate::error::{QuoteError, Result};

/// Run the config command.
pub fn run(cli: &Cli, config: &Config, args: &ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let rendered =
                toml::to_string_pretty(config).map_err(|e| QuoteError::InvalidConfig {
                    message: format!("Failed to render config: {e}"),
                })?;
            print!("{rendered}");
        }
        ConfigAction::Path => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => default_config_path()?,
            };
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => default_config_path()?,
            };

            if path.exists() {
                println!("Config already exists at {}", path.display());
                return Ok(());
            }

            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
