//! ForkparamsCli Subcommands

mod identify;
mod list;
mod show;

use self::{identify::IdentifyCmd, list::ListCmd, show::ShowCmd};
use crate::{config::ForkparamsCliConfig, error::Error};
use abscissa_core::{config::Override, Command, Configurable, FrameworkError, Runnable};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// ForkparamsCli Subcommands
/// Subcommands need to be listed in an enum.
#[derive(Command, Debug, Parser, Runnable)]
pub enum ForkparamsCliCmd {
    /// print a fork's parameter set as JSON
    Show(ShowCmd),
    /// list known forks with their fork id and magic numbers
    List(ListCmd),
    /// report which fork a parameter file belongs to
    Identify(IdentifyCmd),
}

/// Entry point for the application. It needs to be a struct to allow using subcommands!
#[derive(Command, Debug, Parser)]
#[clap(author, about, version)]
pub struct EntryPoint {
    #[clap(subcommand)]
    cmd: ForkparamsCliCmd,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Use the specified config file
    #[clap(short, long)]
    pub config: Option<String>,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        self.cmd.run()
    }
}

/// This trait allows you to define how application configuration is loaded.
impl Configurable<ForkparamsCliConfig> for EntryPoint {
    /// Location of the configuration file
    fn config_path(&self) -> Option<PathBuf> {
        // An explicit --config must exist; the home directory config is optional.
        match &self.config {
            Some(path) => Some(PathBuf::from(path)),
            None => crate::config::default_config_path().filter(|path| path.exists()),
        }
    }

    /// Apply changes to the config after it's been loaded, e.g. overriding
    /// values in a config file using command-line options.
    fn process_config(
        &self,
        config: ForkparamsCliConfig,
    ) -> Result<ForkparamsCliConfig, FrameworkError> {
        match &self.cmd {
            ForkparamsCliCmd::Show(cmd) => cmd.override_config(config),
            _ => Ok(config),
        }
    }
}

/// Pretty-prints `value` as JSON with four space indentation
pub(crate) fn render_json<T: Serialize>(value: &T) -> Result<String, Error> {
    let buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(buf, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&serializer.into_inner()).into_owned())
}
