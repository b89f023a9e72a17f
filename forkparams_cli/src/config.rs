//! ForkparamsCli Config
//!
//! The config file is optional. See `commands.rs` for how its path is
//! chosen.
use forkparams::chain::network::NetworkVariant;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ForkparamsCli Configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ForkparamsCliConfig {
    /// Network variant used when a command does not name one
    pub default_network: NetworkVariant,
}

/// Builds the config path in the user's home directory, `~/.forkparams/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".forkparams");
    path.push("config.toml");

    Some(path)
}
