use crate::{commands::render_json, config::ForkparamsCliConfig, prelude::*};
use abscissa_core::{config, tracing::debug, Command, FrameworkError, Runnable};
use clap::Parser;
use forkparams::{chain::network::NetworkVariant, Fork};

#[derive(Command, Debug, Parser)]
pub struct ShowCmd {
    /// fork name, e.g. `bitcoin-cash` or `bch`
    pub fork: Fork,

    /// network variant, overrides the configured default
    #[clap(short, long)]
    pub network: Option<NetworkVariant>,
}

impl config::Override<ForkparamsCliConfig> for ShowCmd {
    fn override_config(
        &self,
        mut config: ForkparamsCliConfig,
    ) -> Result<ForkparamsCliConfig, FrameworkError> {
        if let Some(network) = self.network {
            config.default_network = network;
        }

        Ok(config)
    }
}

impl Runnable for ShowCmd {
    /// Print the parameter set
    fn run(&self) {
        let network = APP.config().default_network;
        debug!("showing {} {} parameters", self.fork, network);

        let output = render_json(self.fork.parameters(network)).unwrap_or_else(|err| {
            status_err!("Can't render parameters: {}", err);
            std::process::exit(1);
        });

        println!("{}", output);
    }
}
