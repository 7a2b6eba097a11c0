use clap::Subcommand;
use mindtrack_core::Config;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "reset.auto_reset", "log.level")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(data_dir)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(data_dir)?;
            config.set(&key, &value)?;
            config.save(data_dir)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load(data_dir)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save(data_dir)?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", Config::path_in(data_dir).display());
        }
    }
    Ok(())
}
