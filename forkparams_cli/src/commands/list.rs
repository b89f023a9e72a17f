use crate::{commands::render_json, prelude::*};
use abscissa_core::{Command, Runnable};
use clap::Parser;
use forkparams::{chain::network::NetworkVariant, Fork};
use serde::Serialize;

#[derive(Command, Debug, Parser)]
pub struct ListCmd {}

#[derive(Debug, Serialize)]
struct ForkSummary {
    name: &'static str,
    fork_id: String,
    // wire bytes
    mainnet_magic: String,
    testnet_magic: String,
}

impl From<Fork> for ForkSummary {
    fn from(fork: Fork) -> Self {
        ForkSummary {
            name: fork.name(),
            fork_id: format!("{:#04x}", fork.fork_id()),
            mainnet_magic: fork.parameters(NetworkVariant::Mainnet).magic_hex(),
            testnet_magic: fork.parameters(NetworkVariant::Testnet).magic_hex(),
        }
    }
}

impl Runnable for ListCmd {
    /// List all known forks
    fn run(&self) {
        let forks: Vec<ForkSummary> = Fork::ALL.into_iter().map(ForkSummary::from).collect();

        match render_json(&forks) {
            Ok(output) => println!("{}", output),
            Err(err) => {
                status_err!("Can't convert fork list to JSON: {}", err);
                std::process::exit(1);
            }
        }
    }
}
