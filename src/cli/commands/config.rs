//! Config command - print the resolved configuration

use annals::config::AnnalsConfig;
use annals::output::OutputMode;

/// Print the configuration after file lookup and defaults
pub fn config(config: &AnnalsConfig, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Human => print!("{}", config.to_toml()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}
