use crate::{error::Error, prelude::*};
use abscissa_core::{Command, Runnable};
use clap::Parser;
use forkparams::{config, identify};
use std::path::{Path, PathBuf};

#[derive(Command, Debug, Parser)]
pub struct IdentifyCmd {
    /// parameter file, JSON if it ends in `.json`, TOML otherwise
    #[clap(parse(from_os_str))]
    pub path: PathBuf,
}

impl Runnable for IdentifyCmd {
    /// Identify the parameter file's fork
    fn run(&self) {
        match describe(&self.path) {
            Ok(description) => println!("{}", description),
            Err(err) => {
                status_err!("Can't load {}: {}", self.path.display(), err);
                std::process::exit(1);
            }
        }
    }
}

/// `<fork> <network>` for known forks, `unknown` otherwise
fn describe(path: &Path) -> Result<String, Error> {
    let params = config::load_params(path)?;

    Ok(match identify(&params) {
        Some((fork, variant)) => format!("{} {}", fork, variant),
        None => "unknown".to_string(),
    })
}
