//! Config command - write or print the configuration

use std::path::Path;

use ::config::ConfigError;

use crate::SnipsterError;
use crate::cli::ConfigCommands;
use crate::config::SnipsterConfig;

type Result<T> = std::result::Result<T, SnipsterError>;

/// Execute a config subcommand
///
/// `init` writes the defaults to `path` (or the default config location);
/// `show` prints `effective` as TOML.
///
/// # Errors
/// Returns an error if the file already exists without `--force`, or the
/// configuration cannot be serialized or written.
pub fn execute(
    command: &ConfigCommands,
    effective: &SnipsterConfig,
    path: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => SnipsterConfig::config_path()?,
    };

    match command {
        ConfigCommands::Init { force } => {
            if target.exists() && !force {
                return Err(SnipsterError::InvalidInput(format!(
                    "Config file already exists at {} (use --force to overwrite)",
                    target.display()
                )));
            }
            SnipsterConfig::default().save(&target)?;
            if !quiet {
                println!("Wrote default configuration to {}", target.display());
            }
        }
        ConfigCommands::Show => {
            if !quiet {
                println!("# {}", target.display());
            }
            let rendered = toml::to_string_pretty(effective)
                .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;
            print!("{rendered}");
        }
    }
    Ok(())
}
